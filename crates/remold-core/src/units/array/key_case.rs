//! Key case conversion for objects and arrays of objects

use crate::error::Result;
use crate::text::Case;
use crate::unit::{keys, Configurable, Processed, Unit};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyCaseOptions {
    pub case: Case,
    pub recursive: bool,
}

impl Default for KeyCaseOptions {
    fn default() -> Self {
        Self {
            case: Case::Snake,
            recursive: true,
        }
    }
}

/// Rewrites every object key into the configured case
#[derive(Debug, Clone)]
pub struct KeyCaseUnit {
    case: Case,
    recursive: bool,
}

impl Default for KeyCaseUnit {
    fn default() -> Self {
        let options = KeyCaseOptions::default();
        Self {
            case: options.case,
            recursive: options.recursive,
        }
    }
}

impl KeyCaseUnit {
    pub fn new(case: Case) -> Self {
        Self {
            case,
            ..Self::default()
        }
    }

    fn convert(&self, value: Value, depth: usize) -> Value {
        if depth > 0 && !self.recursive {
            return value;
        }
        match value {
            Value::Object(map) => Value::Object(self.convert_map(map, depth)),
            Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(|item| self.convert(item, depth + 1))
                    .collect(),
            ),
            other => other,
        }
    }

    fn convert_map(&self, map: Map<String, Value>, depth: usize) -> Map<String, Value> {
        map.into_iter()
            .map(|(key, value)| (self.case.apply(&key), self.convert(value, depth + 1)))
            .collect()
    }
}

impl Configurable for KeyCaseUnit {
    type Options = KeyCaseOptions;

    fn configure(&mut self, options: KeyCaseOptions) -> Result<()> {
        self.case = options.case;
        self.recursive = options.recursive;
        Ok(())
    }
}

impl Unit for KeyCaseUnit {
    fn name(&self) -> &str {
        "key_case"
    }

    fn process(&self, input: Value) -> Result<Processed> {
        match input {
            Value::Object(map) => Ok(Processed::valid(Value::Object(self.convert_map(map, 0)))),
            Value::Array(items) => Ok(Processed::valid(Value::Array(
                items.into_iter().map(|item| self.convert(item, 0)).collect(),
            ))),
            _ => Ok(Processed::invalid(Value::Object(Map::new()), keys::NOT_ARRAY)),
        }
    }
}
