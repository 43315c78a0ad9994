//! The unit contract
//!
//! A unit takes one value and returns one value plus a [`Status`]. Problems
//! with the data (wrong type, unparseable input, empty result) are reported
//! through the status and never through `Err`; `Err` is reserved for runtime
//! faults, which composites translate into the `transformationError` key.
//!
//! Units are configured once through [`Configurable`] and then invoked any
//! number of times. `process` borrows the unit immutably, so a configured
//! unit can be shared between chains and threads through [`SharedUnit`].
//!
//! Copyright (c) 2025 Remold Team
//! Licensed under the Apache-2.0 license

pub mod status;
pub mod tracked;

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

pub use status::{keys, Processed, Status};
pub use tracked::Tracked;

/// An atomic, configurable transformation
pub trait Unit: Send + Sync {
    /// Short identifier used in logs and error messages
    fn name(&self) -> &str;

    /// Transform `input`.
    ///
    /// Returns `Err` only for runtime faults; data problems come back as an
    /// invalid [`Processed`] carrying the unit's fallback value.
    fn process(&self, input: Value) -> Result<Processed>;

    /// Wrap the unit for use inside composites
    fn into_shared(self) -> SharedUnit
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

/// A unit that can be held by several composites at once
pub type SharedUnit = Arc<dyn Unit>;

impl fmt::Debug for dyn Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit").field("name", &self.name()).finish()
    }
}

/// Units whose behavior is set through an options structure
pub trait Configurable {
    type Options;

    /// Apply `options`, failing with a configuration error when a required
    /// option is missing or unusable
    fn configure(&mut self, options: Self::Options) -> Result<()>;

    /// Build a default instance and configure it in one step
    fn with_options(options: Self::Options) -> Result<Self>
    where
        Self: Default + Sized,
    {
        let mut unit = Self::default();
        unit.configure(options)?;
        Ok(unit)
    }
}

/// Configure a unit from declarative JSON options
pub trait ConfigureFromJson {
    fn configure_json(&mut self, options: Value) -> Result<()>;
}

impl<T> ConfigureFromJson for T
where
    T: Configurable + Unit,
    T::Options: DeserializeOwned,
{
    fn configure_json(&mut self, options: Value) -> Result<()> {
        let options = match options {
            Value::Null => Value::Object(serde_json::Map::new()),
            other => other,
        };
        let options = serde_json::from_value(options).map_err(|source| Error::Options {
            unit: self.name().to_string(),
            source,
        })?;
        self.configure(options)
    }
}

type UnitFunction = dyn Fn(Value) -> Result<Processed> + Send + Sync;

/// A unit backed by a closure
pub struct FnUnit {
    name: String,
    func: Box<UnitFunction>,
}

impl FnUnit {
    /// Unit with full control over the returned status
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(Value) -> Result<Processed> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Box::new(func),
        }
    }

    /// Unit that always succeeds with the mapped value
    pub fn map<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self::new(name, move |value| Ok(Processed::valid(func(value))))
    }
}

impl Unit for FnUnit {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, input: Value) -> Result<Processed> {
        (self.func)(input)
    }
}

impl fmt::Debug for FnUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnUnit").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fn_unit_map() {
        let unit = FnUnit::map("double", |v| json!(v.as_i64().unwrap_or(0) * 2));
        let processed = unit.process(json!(21)).unwrap();
        assert_eq!(processed.value, json!(42));
        assert!(processed.is_valid());
        assert_eq!(unit.name(), "double");
    }

    #[test]
    fn test_fn_unit_fault() {
        let unit = FnUnit::new("broken", |_| Err(Error::fault("exploded")));
        assert!(unit.process(json!(null)).is_err());
    }

    #[test]
    fn test_shared_unit_debug() {
        let shared = FnUnit::map("noop", |v| v).into_shared();
        assert_eq!(format!("{:?}", shared), "Unit { name: \"noop\" }");
    }
}
