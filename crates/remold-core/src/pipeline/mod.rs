//! Field pipeline
//!
//! Applies ordered unit lists to the fields of a JSON object and collects a
//! per-field [`TransformationResult`]. Rules run by priority, highest first,
//! against a working copy of the object, so a rule sees what earlier rules
//! wrote.
//!
//! Copyright (c) 2025 Remold Team
//! Licensed under the Apache-2.0 license

mod builder;

pub use builder::FieldRuleBuilder;

use crate::composite::Chain;
use crate::error::{Error, Result};
use crate::result::{FieldOutcome, TransformationResult};
use crate::unit::Unit;
use serde_json::Value;
use tracing::{debug, warn};

/// Units to apply to one field
#[derive(Debug, Clone)]
pub struct FieldRule {
    field: String,
    target: String,
    chain: Chain,
    priority: i32,
}

impl FieldRule {
    pub fn builder(field: impl Into<String>) -> FieldRuleBuilder {
        FieldRuleBuilder::new(field)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }
}

/// An ordered set of field rules
#[derive(Debug, Clone, Default)]
pub struct FieldPipeline {
    rules: Vec<FieldRule>,
}

impl FieldPipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule to the pipeline
    pub fn add_rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        // Sort by priority (highest first)
        self.rules.sort_by(|a, b| b.priority.cmp(&a.priority));
        self
    }

    /// Add multiple rules to the pipeline
    pub fn add_rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = FieldRule>,
    {
        self.rules.extend(rules);
        self.rules.sort_by(|a, b| b.priority.cmp(&a.priority));
        self
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Run every rule and return the per-field outcomes
    pub fn transform(&self, input: &Value) -> Result<TransformationResult> {
        self.apply(input).map(|(_, result)| result)
    }

    /// Run every rule and return the transformed object with the outcomes
    pub fn apply(&self, input: &Value) -> Result<(Value, TransformationResult)> {
        let Value::Object(source) = input else {
            return Err(Error::Input {
                message: format!("Field pipeline expects an object, got {}", type_name(input)),
            });
        };

        let mut working = source.clone();
        let mut result = TransformationResult::default();

        for rule in &self.rules {
            let Some(value) = working.get(&rule.field).cloned() else {
                debug!("Skipping rule for missing field '{}'", rule.field);
                continue;
            };

            let processed = rule.chain.process(value)?;
            if !processed.is_valid() {
                warn!(
                    "Field '{}' failed transformation: {}",
                    rule.field,
                    processed.error_key()
                );
            }

            working.insert(rule.target.clone(), processed.value.clone());
            result.insert(rule.target.clone(), FieldOutcome::from(processed));
        }

        debug!(
            "Field pipeline applied {} of {} rules",
            result.len(),
            self.rules.len()
        );
        Ok((Value::Object(working), result))
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Case;
    use crate::units::{CaseUnit, MaskUnit};
    use serde_json::json;

    fn rule(field: &str, priority: i32) -> FieldRule {
        FieldRule::builder(field)
            .unit(CaseUnit::new(Case::Upper))
            .priority(priority)
            .build()
            .unwrap()
    }

    #[test]
    fn test_rules_sorted_by_priority() {
        let pipeline = FieldPipeline::new()
            .add_rule(rule("low", 1))
            .add_rules([rule("high", 10), rule("mid", 5)]);
        let order: Vec<_> = pipeline.rules().iter().map(FieldRule::field).collect();
        assert_eq!(order, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_missing_fields_are_skipped() {
        let pipeline = FieldPipeline::new().add_rule(rule("name", 0)).add_rule(rule("city", 0));
        let result = pipeline.transform(&json!({"name": "ada"})).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.value("name"), Some(&json!("ADA")));
        assert!(result.get("city").is_none());
    }

    #[test]
    fn test_later_rules_see_earlier_outputs() {
        let pipeline = FieldPipeline::new()
            .add_rule(
                FieldRule::builder("phone")
                    .target("formatted")
                    .unit(MaskUnit::new("(##) ####-####"))
                    .priority(1)
                    .build()
                    .unwrap(),
            )
            .add_rule(rule("formatted", 0));
        let (output, result) = pipeline.apply(&json!({"phone": "1234567890"})).unwrap();
        assert_eq!(
            output,
            json!({"phone": "1234567890", "formatted": "(12) 3456-7890"})
        );
        assert!(result.is_valid());
    }

    #[test]
    fn test_non_object_input() {
        let err = FieldPipeline::new().transform(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, Error::Input { .. }));
    }
}
