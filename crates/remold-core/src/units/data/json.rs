//! JSON encoding and decoding

use crate::error::Result;
use crate::unit::{keys, Configurable, Processed, Unit};
use serde::Deserialize;
use serde_json::{Map, Value};

pub const DEFAULT_MAX_DEPTH: usize = 512;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JsonOptions {
    pub max_depth: usize,
    pub pretty: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            pretty: false,
        }
    }
}

/// Decodes JSON text, or encodes any other value as JSON text
#[derive(Debug, Clone, Default)]
pub struct JsonUnit {
    options: JsonOptions,
}

impl Configurable for JsonUnit {
    type Options = JsonOptions;

    fn configure(&mut self, options: JsonOptions) -> Result<()> {
        self.options = options;
        Ok(())
    }
}

/// Nesting depth of containers; scalars are depth 0
pub fn nesting_depth(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(nesting_depth).max().unwrap_or(0),
        Value::Object(map) => 1 + map.values().map(nesting_depth).max().unwrap_or(0),
        _ => 0,
    }
}

impl JsonUnit {
    fn decode(&self, text: &str) -> Processed {
        match serde_json::from_str::<Value>(text) {
            Ok(value) if nesting_depth(&value) <= self.options.max_depth => Processed::valid(value),
            Ok(_) => Processed::invalid(Value::Object(Map::new()), keys::INVALID_JSON),
            Err(err) => {
                log::debug!("json decode failed: {}", err);
                Processed::invalid(Value::Object(Map::new()), keys::INVALID_JSON)
            }
        }
    }

    fn encode(&self, value: &Value) -> Processed {
        let encoded = if self.options.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        match encoded {
            Ok(text) => Processed::valid(Value::String(text)),
            Err(_) => Processed::invalid(Value::String(String::new()), keys::UNSERIALIZABLE),
        }
    }
}

impl Unit for JsonUnit {
    fn name(&self) -> &str {
        "json"
    }

    fn process(&self, input: Value) -> Result<Processed> {
        Ok(match &input {
            Value::String(text) => self.decode(text),
            other => self.encode(other),
        })
    }
}
