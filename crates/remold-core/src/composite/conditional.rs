//! Predicate-guarded delegation
//!
//! Copyright (c) 2025 Remold Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::unit::{keys, Configurable, Processed, SharedUnit, Unit};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Decides whether a [`Conditional`] delegates; an `Err` counts as `false`
pub type Predicate = Arc<dyn Fn(&Value) -> anyhow::Result<bool> + Send + Sync>;

/// Predicate from an infallible closure
pub fn when<F>(condition: F) -> Predicate
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Arc::new(move |value: &Value| -> anyhow::Result<bool> { Ok(condition(value)) })
}

/// Predicate from a fallible closure
pub fn try_when<F>(condition: F) -> Predicate
where
    F: Fn(&Value) -> anyhow::Result<bool> + Send + Sync + 'static,
{
    Arc::new(condition)
}

/// Options for [`Conditional`]
#[derive(Clone)]
pub struct ConditionalOptions {
    pub unit: Option<SharedUnit>,
    pub condition: Option<Predicate>,
    /// Returned instead of the input when the condition does not hold
    pub default_value: Option<Value>,
    /// Fall back to the default value when the delegate fails
    pub use_default_on_error: bool,
}

impl Default for ConditionalOptions {
    fn default() -> Self {
        Self {
            unit: None,
            condition: None,
            default_value: None,
            use_default_on_error: true,
        }
    }
}

impl fmt::Debug for ConditionalOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionalOptions")
            .field("unit", &self.unit)
            .field("condition", &self.condition.is_some())
            .field("default_value", &self.default_value)
            .field("use_default_on_error", &self.use_default_on_error)
            .finish()
    }
}

/// Runs a unit only when a predicate holds for the input
#[derive(Clone)]
pub struct Conditional {
    unit: Option<SharedUnit>,
    condition: Option<Predicate>,
    default_value: Option<Value>,
    use_default_on_error: bool,
}

impl Default for Conditional {
    fn default() -> Self {
        Self {
            unit: None,
            condition: None,
            default_value: None,
            use_default_on_error: true,
        }
    }
}

impl Conditional {
    pub fn new<U: Unit + 'static>(unit: U, condition: Predicate) -> Self {
        Self {
            unit: Some(unit.into_shared()),
            condition: Some(condition),
            ..Self::default()
        }
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn use_default_on_error(mut self, enabled: bool) -> Self {
        self.use_default_on_error = enabled;
        self
    }

    fn fallback(&self, input: Value) -> Value {
        self.default_value.clone().unwrap_or(input)
    }
}

impl Configurable for Conditional {
    type Options = ConditionalOptions;

    fn configure(&mut self, options: ConditionalOptions) -> Result<()> {
        let unit = options
            .unit
            .ok_or_else(|| Error::configuration(self.name(), "The unit option is required"))?;
        let condition = options
            .condition
            .ok_or_else(|| Error::configuration(self.name(), "The condition option is required"))?;

        self.unit = Some(unit);
        self.condition = Some(condition);
        self.default_value = options.default_value;
        self.use_default_on_error = options.use_default_on_error;
        Ok(())
    }
}

impl Unit for Conditional {
    fn name(&self) -> &str {
        "conditional"
    }

    fn process(&self, input: Value) -> Result<Processed> {
        let (Some(unit), Some(condition)) = (&self.unit, &self.condition) else {
            log::warn!("Conditional unit used before it was configured");
            return Ok(Processed::invalid(input, keys::TRANSFORMATION_ERROR));
        };

        let holds = condition(&input).unwrap_or_else(|e| {
            log::debug!("Condition failed, treating as false: {}", e);
            false
        });
        if !holds {
            return Ok(Processed::valid(self.fallback(input)));
        }

        match unit.process(input.clone()) {
            Ok(processed) if processed.is_valid() => Ok(processed),
            Ok(processed) if self.use_default_on_error => {
                let (_, status) = processed.into_parts();
                Ok(Processed {
                    value: self.fallback(input),
                    status,
                })
            }
            Ok(processed) => Ok(processed),
            Err(e) => {
                log::warn!("Conditional unit '{}' failed: {}", unit.name(), e);
                Ok(Processed::invalid(self.fallback(input), keys::TRANSFORMATION_ERROR))
            }
        }
    }
}

impl fmt::Debug for Conditional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conditional")
            .field("unit", &self.unit)
            .field("default_value", &self.default_value)
            .field("use_default_on_error", &self.use_default_on_error)
            .finish_non_exhaustive()
    }
}
