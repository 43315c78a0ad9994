//! Key renaming through an explicit mapping

use crate::error::{Error, Result};
use crate::unit::{keys, Configurable, Processed, Unit};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyMapOptions {
    /// Old key to new key
    pub mapping: Option<HashMap<String, String>>,
    pub remove_unmapped: bool,
    pub recursive: bool,
}

impl Default for KeyMapOptions {
    fn default() -> Self {
        Self {
            mapping: None,
            remove_unmapped: false,
            recursive: true,
        }
    }
}

/// Renames object keys according to a mapping
#[derive(Debug, Clone)]
pub struct KeyMapUnit {
    mapping: Option<HashMap<String, String>>,
    remove_unmapped: bool,
    recursive: bool,
}

impl Default for KeyMapUnit {
    fn default() -> Self {
        Self {
            mapping: None,
            remove_unmapped: false,
            recursive: true,
        }
    }
}

impl KeyMapUnit {
    pub fn new<I, K, V>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            mapping: Some(
                mapping
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
            ..Self::default()
        }
    }

    fn remap(&self, mapping: &HashMap<String, String>, value: Value) -> Value {
        match value {
            Value::Object(map) => Value::Object(self.remap_object(mapping, map)),
            Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(|item| self.remap(mapping, item))
                    .collect(),
            ),
            other => other,
        }
    }

    fn remap_object(
        &self,
        mapping: &HashMap<String, String>,
        map: Map<String, Value>,
    ) -> Map<String, Value> {
        let mut out = Map::new();
        for (key, value) in map {
            let value = if self.recursive {
                self.remap(mapping, value)
            } else {
                value
            };
            match mapping.get(&key) {
                Some(renamed) => {
                    out.insert(renamed.clone(), value);
                }
                None if self.remove_unmapped => {}
                None => {
                    out.insert(key, value);
                }
            }
        }
        out
    }
}

impl Configurable for KeyMapUnit {
    type Options = KeyMapOptions;

    fn configure(&mut self, options: KeyMapOptions) -> Result<()> {
        let mapping = options
            .mapping
            .ok_or_else(|| Error::configuration(self.name(), "The mapping option is required"))?;
        self.mapping = Some(mapping);
        self.remove_unmapped = options.remove_unmapped;
        self.recursive = options.recursive;
        Ok(())
    }
}

impl Unit for KeyMapUnit {
    fn name(&self) -> &str {
        "key_map"
    }

    fn process(&self, input: Value) -> Result<Processed> {
        let Some(mapping) = self.mapping.as_ref() else {
            return Err(Error::fault("key_map unit used before mapping was configured"));
        };

        match input {
            Value::Object(map) => Ok(Processed::valid(Value::Object(
                self.remap_object(mapping, map),
            ))),
            Value::Array(items) => Ok(Processed::valid(Value::Array(
                items
                    .into_iter()
                    .map(|item| self.remap(mapping, item))
                    .collect(),
            ))),
            _ => Ok(Processed::invalid(Value::Object(Map::new()), keys::NOT_ARRAY)),
        }
    }
}
