//! Grouping of records by the value of one field

use crate::error::{Error, Result};
use crate::unit::{keys, Configurable, Processed, Unit};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupOptions {
    pub group_by: Option<String>,
    /// Keep each record under its original index or key inside the bucket
    pub preserve_keys: bool,
}

/// Buckets the elements of an array or object by a shared field
#[derive(Debug, Clone, Default)]
pub struct GroupUnit {
    group_by: Option<String>,
    preserve_keys: bool,
}

impl GroupUnit {
    pub fn new(group_by: impl Into<String>) -> Self {
        Self {
            group_by: Some(group_by.into()),
            preserve_keys: false,
        }
    }

    pub fn preserve_keys(mut self, preserve: bool) -> Self {
        self.preserve_keys = preserve;
        self
    }
}

impl Configurable for GroupUnit {
    type Options = GroupOptions;

    fn configure(&mut self, options: GroupOptions) -> Result<()> {
        let group_by = options
            .group_by
            .filter(|field| !field.is_empty())
            .ok_or_else(|| Error::configuration(self.name(), "The groupBy option is required"))?;
        self.group_by = Some(group_by);
        self.preserve_keys = options.preserve_keys;
        Ok(())
    }
}

/// Bucket name for a record's field value; `None` for values that cannot
/// name a bucket
fn group_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl Unit for GroupUnit {
    fn name(&self) -> &str {
        "group"
    }

    fn process(&self, input: Value) -> Result<Processed> {
        let Some(field) = self.group_by.as_deref() else {
            return Err(Error::fault("group unit used before groupBy was configured"));
        };

        let records: Vec<(String, Value)> = match input {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item))
                .collect(),
            Value::Object(map) => map.into_iter().collect(),
            _ => return Ok(Processed::invalid(Value::Object(Map::new()), keys::NOT_ARRAY)),
        };

        let mut groups = Map::new();
        for (original_key, record) in records {
            let Some(bucket) = record.get(field).and_then(group_key) else {
                continue;
            };
            let entry = groups.entry(bucket).or_insert_with(|| {
                if self.preserve_keys {
                    Value::Object(Map::new())
                } else {
                    Value::Array(Vec::new())
                }
            });
            match entry {
                Value::Object(members) => {
                    members.insert(original_key, record);
                }
                Value::Array(members) => members.push(record),
                _ => {}
            }
        }

        Ok(Processed::valid(Value::Object(groups)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::ConfigureFromJson;
    use serde_json::json;

    #[test]
    fn test_group_array_by_field() {
        let unit = GroupUnit::new("type");
        let processed = unit
            .process(json!([
                {"id": 1, "type": "A"},
                {"id": 2, "type": "B"},
                {"id": 3, "type": "A"}
            ]))
            .unwrap();
        assert_eq!(
            processed.value,
            json!({
                "A": [{"id": 1, "type": "A"}, {"id": 3, "type": "A"}],
                "B": [{"id": 2, "type": "B"}]
            })
        );
        assert!(processed.is_valid());
    }

    #[test]
    fn test_preserve_keys() {
        let mut unit = GroupUnit::default();
        unit.configure_json(json!({"groupBy": "role", "preserveKeys": true}))
            .unwrap();
        let processed = unit
            .process(json!({"ann": {"role": "admin"}, "bob": {"role": "user"}}))
            .unwrap();
        assert_eq!(
            processed.value,
            json!({
                "admin": {"ann": {"role": "admin"}},
                "user": {"bob": {"role": "user"}}
            })
        );

        let processed = unit
            .process(json!([{"role": "x"}, {"role": "y"}, {"role": "x"}]))
            .unwrap();
        assert_eq!(
            processed.value,
            json!({"x": {"0": {"role": "x"}, "2": {"role": "x"}}, "y": {"1": {"role": "y"}}})
        );
    }

    #[test]
    fn test_scalar_keys_and_skipped_records() {
        let unit = GroupUnit::new("k");
        let processed = unit
            .process(json!([
                {"k": 1},
                {"k": true},
                {"k": null},
                {"k": [1]},
                {"other": 1},
                "not a record",
                {"k": 1}
            ]))
            .unwrap();
        assert_eq!(
            processed.value,
            json!({"1": [{"k": 1}, {"k": 1}], "true": [{"k": true}]})
        );
    }

    #[test]
    fn test_group_by_is_required() {
        let mut unit = GroupUnit::default();
        assert!(unit.configure_json(json!({})).unwrap_err().is_configuration());
        assert!(unit
            .configure_json(json!({"groupBy": ""}))
            .unwrap_err()
            .is_configuration());
        assert!(unit.process(json!([])).is_err());
    }

    #[test]
    fn test_scalar_input() {
        let processed = GroupUnit::new("type").process(json!("nope")).unwrap();
        assert_eq!(processed.value, json!({}));
        assert_eq!(processed.error_key(), "notArray");
    }
}
