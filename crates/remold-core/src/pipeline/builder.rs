//! Builder for field rules
//!
//! Copyright (c) 2025 Remold Team
//! Licensed under the Apache-2.0 license

use super::FieldRule;
use crate::composite::Chain;
use crate::error::{Error, Result};
use crate::unit::{SharedUnit, Unit};

/// Builder for creating field rules
pub struct FieldRuleBuilder {
    field: String,
    target: Option<String>,
    units: Vec<SharedUnit>,
    priority: i32,
    stop_on_error: bool,
}

impl FieldRuleBuilder {
    /// Create a new rule builder for `field`
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            target: None,
            units: Vec::new(),
            priority: 0,
            stop_on_error: true,
        }
    }

    /// Write the output to a different field
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Append a unit
    pub fn unit<U: Unit + 'static>(mut self, unit: U) -> Self {
        self.units.push(unit.into_shared());
        self
    }

    /// Append a unit shared with other rules
    pub fn shared_unit(mut self, unit: SharedUnit) -> Self {
        self.units.push(unit);
        self
    }

    /// Set the priority; higher runs first
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Keep running the rule's units after one fails
    pub fn continue_on_error(mut self) -> Self {
        self.stop_on_error = false;
        self
    }

    /// Build the field rule
    pub fn build(self) -> Result<FieldRule> {
        if self.units.is_empty() {
            return Err(Error::Configuration {
                message: format!("Field rule '{}' has no units", self.field),
                unit: None,
            });
        }

        let chain = self
            .units
            .into_iter()
            .fold(Chain::new(), Chain::then_shared)
            .stop_on_error(self.stop_on_error);

        Ok(FieldRule {
            target: self.target.unwrap_or_else(|| self.field.clone()),
            field: self.field,
            chain,
            priority: self.priority,
        })
    }
}
