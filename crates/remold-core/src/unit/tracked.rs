//! Stateful adapter over the unit contract
//!
//! Some callers want the classic protocol: call `process`, then ask the unit
//! whether it is still valid, and reset it before reusing it for an
//! unrelated object. [`Tracked`] keeps that status next to the unit.
//!
//! The status is sticky: an invalid outcome overwrites it, a valid outcome
//! leaves it alone, and only [`Tracked::reset`] makes the unit valid again.

use super::{Configurable, Status, Unit};
use crate::error::Result;
use serde_json::Value;

/// A unit paired with the validity state of its previous calls
#[derive(Debug)]
pub struct Tracked<U> {
    unit: U,
    status: Status,
}

impl<U: Unit> Tracked<U> {
    pub fn new(unit: U) -> Self {
        Self {
            unit,
            status: Status::Valid,
        }
    }

    /// Process `input` and fold the outcome into the stored status.
    ///
    /// Runtime faults are returned as `Err` and leave the status untouched.
    pub fn process(&mut self, input: Value) -> Result<Value> {
        let processed = self.unit.process(input)?;
        if !processed.status.is_valid() {
            log::debug!(
                "unit '{}' marked invalid: {}",
                self.unit.name(),
                processed.status.error_key()
            );
            self.status = processed.status;
        }
        Ok(processed.value)
    }

    pub fn is_valid(&self) -> bool {
        self.status.is_valid()
    }

    pub fn error_key(&self) -> &str {
        self.status.error_key()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn reset(&mut self) {
        self.status = Status::Valid;
    }

    pub fn unit(&self) -> &U {
        &self.unit
    }

    pub fn into_inner(self) -> U {
        self.unit
    }
}

impl<U: Unit + Configurable> Tracked<U> {
    pub fn configure(&mut self, options: U::Options) -> Result<()> {
        self.unit.configure(options)
    }
}

impl<U: Unit + Default> Default for Tracked<U> {
    fn default() -> Self {
        Self::new(U::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{FnUnit, Processed};
    use serde_json::json;

    fn strings_only() -> FnUnit {
        FnUnit::new("strings_only", |value| {
            Ok(match value {
                Value::String(s) => Processed::valid(Value::String(s.to_uppercase())),
                _ => Processed::invalid(json!(""), "notString"),
            })
        })
    }

    #[test]
    fn test_status_is_sticky_until_reset() {
        let mut tracked = Tracked::new(strings_only());
        assert!(tracked.is_valid());
        assert_eq!(tracked.error_key(), "");

        assert_eq!(tracked.process(json!(1)).unwrap(), json!(""));
        assert!(!tracked.is_valid());
        assert_eq!(tracked.error_key(), "notString");

        // a later success does not clear the failure
        assert_eq!(tracked.process(json!("ok")).unwrap(), json!("OK"));
        assert!(!tracked.is_valid());

        tracked.reset();
        assert!(tracked.is_valid());
        assert_eq!(tracked.error_key(), "");
    }
}
