//! Aggregated per-field outcomes of a pipeline run

use crate::unit::{keys, Processed};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A failed field's error key with a readable message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub key: String,
    pub message: String,
}

impl ErrorDetail {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let message = default_message(&key).to_string();
        Self { key, message }
    }
}

/// English text for a stable error key
pub fn default_message(key: &str) -> &'static str {
    match key {
        keys::NOT_STRING => "The value must be a string",
        keys::NOT_ARRAY => "The value must be an object or an array",
        keys::NOT_NUMERIC => "The value must be numeric",
        keys::NO_MASK => "No mask was configured",
        keys::NO_TEMPLATE => "No template was configured",
        keys::EMPTY_SLUG => "The value does not produce a slug",
        keys::INVALID_DATE => "The value is not a valid date",
        keys::INVALID_JSON => "The value is not valid JSON",
        keys::UNSERIALIZABLE => "The value cannot be encoded as JSON",
        keys::TRANSFORMATION_ERROR => "The transformation failed",
        _ => "The value is invalid",
    }
}

/// Value and validity of one transformed field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOutcome {
    pub value: Value,
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

impl From<Processed> for FieldOutcome {
    fn from(processed: Processed) -> Self {
        let (value, status) = processed.into_parts();
        let error = (!status.is_valid()).then(|| ErrorDetail::new(status.error_key()));
        Self {
            value,
            valid: error.is_none(),
            error,
        }
    }
}

/// Outcomes keyed by field, in the order the fields were written
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransformationResult {
    fields: IndexMap<String, FieldOutcome>,
}

impl TransformationResult {
    pub fn from_outcomes<I, K>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = (K, FieldOutcome)>,
        K: Into<String>,
    {
        Self {
            fields: outcomes
                .into_iter()
                .map(|(field, outcome)| (field.into(), outcome))
                .collect(),
        }
    }

    /// Record an outcome; an existing outcome for the field is replaced
    pub(crate) fn insert(&mut self, field: impl Into<String>, outcome: FieldOutcome) {
        self.fields.insert(field.into(), outcome);
    }

    /// True when every recorded field is valid
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(|outcome| outcome.valid)
    }

    pub fn get(&self, field: &str) -> Option<&FieldOutcome> {
        self.fields.get(field)
    }

    pub fn value(&self, field: &str) -> Option<&Value> {
        self.get(field).map(|outcome| &outcome.value)
    }

    pub fn errors(&self) -> impl Iterator<Item = (&str, &ErrorDetail)> {
        self.fields
            .iter()
            .filter_map(|(field, outcome)| outcome.error.as_ref().map(|e| (field.as_str(), e)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldOutcome)> {
        self.fields.iter().map(|(field, outcome)| (field.as_str(), outcome))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field values as a JSON object
    pub fn to_object(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|(field, outcome)| (field.clone(), outcome.value.clone()))
            .collect()
    }
}
