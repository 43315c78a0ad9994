//! Sequential composition of units
//!
//! A chain feeds the output of each unit into the next. The first failure
//! decides the chain's error key; whether later units still run depends on
//! `stop_on_error`.
//!
//! Copyright (c) 2025 Remold Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use crate::unit::{keys, Configurable, Processed, SharedUnit, Status, Unit};
use serde_json::Value;

/// Options for [`Chain`]
#[derive(Debug, Clone)]
pub struct ChainOptions {
    /// Units to run, in order
    pub units: Vec<SharedUnit>,
    /// Return as soon as a unit fails instead of running the rest
    pub stop_on_error: bool,
}

impl Default for ChainOptions {
    fn default() -> Self {
        Self {
            units: Vec::new(),
            stop_on_error: true,
        }
    }
}

/// Runs units one after another
#[derive(Debug, Clone)]
pub struct Chain {
    units: Vec<SharedUnit>,
    stop_on_error: bool,
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl Chain {
    /// Create an empty chain that stops on the first error
    pub fn new() -> Self {
        Self {
            units: Vec::new(),
            stop_on_error: true,
        }
    }

    /// Append a unit to the end of the chain
    pub fn then<U: Unit + 'static>(mut self, unit: U) -> Self {
        self.units.push(unit.into_shared());
        self
    }

    /// Append a unit that is shared with other composites
    pub fn then_shared(mut self, unit: SharedUnit) -> Self {
        self.units.push(unit);
        self
    }

    pub fn stop_on_error(mut self, stop: bool) -> Self {
        self.stop_on_error = stop;
        self
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl Configurable for Chain {
    type Options = ChainOptions;

    fn configure(&mut self, options: ChainOptions) -> Result<()> {
        self.units = options.units;
        self.stop_on_error = options.stop_on_error;
        Ok(())
    }
}

impl Unit for Chain {
    fn name(&self) -> &str {
        "chain"
    }

    fn process(&self, input: Value) -> Result<Processed> {
        let mut value = input;
        let mut status = Status::Valid;

        for unit in &self.units {
            let before = value.clone();
            match unit.process(value) {
                Ok(processed) => {
                    let (output, unit_status) = processed.into_parts();
                    value = output;
                    if unit_status.is_valid() {
                        continue;
                    }
                    if status.is_valid() {
                        status = unit_status;
                    }
                    if self.stop_on_error {
                        break;
                    }
                }
                Err(e) => {
                    value = before;
                    if status.is_valid() {
                        status = Status::invalid(keys::TRANSFORMATION_ERROR);
                    }
                    if self.stop_on_error {
                        log::debug!("Chain stopped at unit '{}': {}", unit.name(), e);
                        break;
                    }
                    log::warn!("Chained unit '{}' failed: {}", unit.name(), e);
                }
            }
        }

        Ok(Processed { value, status })
    }
}
