//! Error types for the Remold core library
//!
//! Only two kinds of failure travel through `Result`: configuration errors
//! raised while a unit is being set up, and runtime faults raised by a unit
//! while it processes a value. Problems with the data itself never show up
//! here; they are reported through [`crate::Status`].

use thiserror::Error;

/// Main error type for Remold operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required option is missing or an option has an unusable value
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        unit: Option<String>,
    },

    /// Options could not be deserialized from their JSON form
    #[error("Invalid options for {unit}: {source}")]
    Options {
        unit: String,
        #[source]
        source: serde_json::Error,
    },

    /// A unit failed while processing a value
    #[error("Transformation fault: {message}")]
    Fault {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// The value handed to a dispatcher does not have the required shape
    #[error("Invalid input: {message}")]
    Input { message: String },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Configuration error attributed to a unit
    pub fn configuration(unit: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
            unit: Some(unit.into()),
        }
    }

    /// Runtime fault without an underlying cause
    pub fn fault(message: impl Into<String>) -> Self {
        Error::Fault {
            message: message.into(),
            source: None,
        }
    }

    /// Whether this error came out of a `configure` call
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration { .. } | Error::Options { .. })
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Fault {
            message: err.to_string(),
            source: Some(err),
        }
    }
}
