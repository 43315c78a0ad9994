//! Flattening of nested objects and arrays into a single-level object
//!
//! Nested keys are joined with a separator (`{"a":{"b":1}}` becomes
//! `{"a.b":1}`); array indices take part in the path like keys do. Empty
//! nested containers have nothing to flatten and stay in place as values.
//!
//! When a flattened path collides with a key that already exists, the later
//! value wins and the key keeps the position it was first inserted at.

use crate::error::Result;
use crate::unit::{keys, Configurable, Processed, Unit};
use serde::Deserialize;
use serde_json::{Map, Value};

const DEFAULT_SEPARATOR: &str = ".";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlattenOptions {
    /// Levels to descend; negative means unlimited, `0` leaves input as is
    pub depth: i64,
    pub separator: String,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            depth: -1,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Collapses nested structures into dotted paths.
///
/// Empty nested objects and arrays are kept as leaf values under their path
/// (`{"a":{"b":[]}}` becomes `{"a.b":[]}`) rather than dropped.
#[derive(Debug, Clone)]
pub struct FlattenUnit {
    depth: Option<usize>,
    separator: String,
}

impl Default for FlattenUnit {
    fn default() -> Self {
        Self {
            depth: None,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl Configurable for FlattenUnit {
    type Options = FlattenOptions;

    fn configure(&mut self, options: FlattenOptions) -> Result<()> {
        self.depth = usize::try_from(options.depth).ok();
        self.separator = options.separator;
        Ok(())
    }
}

fn entries(value: Value) -> Vec<(String, Value)> {
    match value {
        Value::Object(map) => map.into_iter().collect(),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item))
            .collect(),
        _ => Vec::new(),
    }
}

fn is_nonempty_container(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    }
}

impl FlattenUnit {
    pub fn new(depth: Option<usize>, separator: impl Into<String>) -> Self {
        Self {
            depth,
            separator: separator.into(),
        }
    }

    fn may_descend(&self, level: usize) -> bool {
        self.depth.map_or(true, |depth| level < depth)
    }

    fn flatten_into(
        &self,
        out: &mut Map<String, Value>,
        prefix: Option<&str>,
        container: Value,
        level: usize,
    ) {
        for (key, value) in entries(container) {
            let path = match prefix {
                Some(prefix) => format!("{}{}{}", prefix, self.separator, key),
                None => key,
            };
            if is_nonempty_container(&value) && self.may_descend(level) {
                self.flatten_into(out, Some(&path), value, level + 1);
            } else {
                out.insert(path, value);
            }
        }
    }
}

impl Unit for FlattenUnit {
    fn name(&self) -> &str {
        "flatten"
    }

    fn process(&self, input: Value) -> Result<Processed> {
        if !(input.is_object() || input.is_array()) {
            return Ok(Processed::invalid(Value::Object(Map::new()), keys::NOT_ARRAY));
        }
        if self.depth == Some(0) {
            return Ok(Processed::valid(input));
        }

        let mut out = Map::new();
        self.flatten_into(&mut out, None, input, 0);
        Ok(Processed::valid(Value::Object(out)))
    }
}
