//! Validity protocol returned by every unit
//!
//! Copyright (c) 2025 Remold Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable error keys reported through [`Status::Invalid`].
///
/// Keys are meant to be mapped to human-readable messages by the caller.
pub mod keys {
    pub const NOT_STRING: &str = "notString";
    pub const NOT_ARRAY: &str = "notArray";
    pub const NOT_NUMERIC: &str = "notNumeric";
    pub const NO_MASK: &str = "noMask";
    pub const NO_TEMPLATE: &str = "noTemplate";
    pub const EMPTY_SLUG: &str = "emptySlug";
    pub const INVALID_DATE: &str = "invalidDate";
    pub const INVALID_JSON: &str = "invalidJson";
    pub const UNSERIALIZABLE: &str = "unserializable";
    /// Generic key for runtime faults caught by a composite
    pub const TRANSFORMATION_ERROR: &str = "transformationError";
}

/// Outcome of a single `process` call
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase", from = "StatusRepr")]
pub enum Status {
    #[default]
    Valid,
    Invalid {
        #[serde(rename = "errorKey")]
        error_key: String,
    },
}

/// Wire form of [`Status`]; decoding goes through [`Status::invalid`] so an
/// empty key cannot produce an invalid status without one
#[derive(Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
enum StatusRepr {
    Valid,
    Invalid {
        #[serde(rename = "errorKey", default)]
        error_key: String,
    },
}

impl From<StatusRepr> for Status {
    fn from(repr: StatusRepr) -> Self {
        match repr {
            StatusRepr::Valid => Status::Valid,
            StatusRepr::Invalid { error_key } => Status::invalid(error_key),
        }
    }
}

impl Status {
    /// Invalid status; an empty key is replaced with `transformationError`
    pub fn invalid(error_key: impl Into<String>) -> Self {
        let error_key = error_key.into();
        if error_key.is_empty() {
            return Status::Invalid {
                error_key: keys::TRANSFORMATION_ERROR.to_string(),
            };
        }
        Status::Invalid { error_key }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Status::Valid)
    }

    /// Error key, or `""` when valid
    pub fn error_key(&self) -> &str {
        match self {
            Status::Valid => "",
            Status::Invalid { error_key } => error_key,
        }
    }
}

/// A transformed value together with the status of the unit that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Processed {
    pub value: Value,
    pub status: Status,
}

impl Processed {
    pub fn valid(value: Value) -> Self {
        Self {
            value,
            status: Status::Valid,
        }
    }

    pub fn invalid(value: Value, error_key: impl Into<String>) -> Self {
        Self {
            value,
            status: Status::invalid(error_key),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status.is_valid()
    }

    pub fn error_key(&self) -> &str {
        self.status.error_key()
    }

    pub fn into_parts(self) -> (Value, Status) {
        (self.value, self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_key_present_iff_invalid() {
        assert_eq!(Status::Valid.error_key(), "");
        assert!(Status::Valid.is_valid());

        let status = Status::invalid(keys::NO_MASK);
        assert!(!status.is_valid());
        assert_eq!(status.error_key(), "noMask");

        let status = Status::invalid("");
        assert_eq!(status.error_key(), keys::TRANSFORMATION_ERROR);
    }

    #[test]
    fn test_status_serialization() {
        let value = serde_json::to_value(Status::invalid("notArray")).unwrap();
        assert_eq!(value, json!({"status": "invalid", "errorKey": "notArray"}));
        assert_eq!(serde_json::to_value(Status::Valid).unwrap(), json!({"status": "valid"}));
    }

    #[test]
    fn test_status_deserialization_keeps_key_invariant() {
        let status: Status =
            serde_json::from_value(json!({"status": "invalid", "errorKey": ""})).unwrap();
        assert_eq!(status.error_key(), keys::TRANSFORMATION_ERROR);

        let status: Status = serde_json::from_value(json!({"status": "invalid"})).unwrap();
        assert_eq!(status.error_key(), keys::TRANSFORMATION_ERROR);

        let status: Status =
            serde_json::from_value(json!({"status": "invalid", "errorKey": "noMask"})).unwrap();
        assert_eq!(status, Status::invalid(keys::NO_MASK));

        let status: Status = serde_json::from_value(json!({"status": "valid"})).unwrap();
        assert!(status.is_valid());
    }

    #[test]
    fn test_processed_parts() {
        let processed = Processed::invalid(json!(""), "notString");
        assert!(!processed.is_valid());
        let (value, status) = processed.into_parts();
        assert_eq!(value, json!(""));
        assert_eq!(status.error_key(), "notString");
    }
}
