//! Case conversion unit

use crate::error::Result;
use crate::text::Case;
use crate::unit::{keys, Configurable, Processed, Unit};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaseOptions {
    pub case: Case,
}

/// Converts a string to one of the canonical cases
#[derive(Debug, Clone, Default)]
pub struct CaseUnit {
    case: Case,
}

impl CaseUnit {
    pub fn new(case: Case) -> Self {
        Self { case }
    }
}

impl Configurable for CaseUnit {
    type Options = CaseOptions;

    fn configure(&mut self, options: CaseOptions) -> Result<()> {
        self.case = options.case;
        Ok(())
    }
}

impl Unit for CaseUnit {
    fn name(&self) -> &str {
        "case"
    }

    fn process(&self, input: Value) -> Result<Processed> {
        match input {
            Value::String(s) => Ok(Processed::valid(Value::String(self.case.apply(&s)))),
            _ => Ok(Processed::invalid(Value::String(String::new()), keys::NOT_STRING)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::ConfigureFromJson;
    use serde_json::json;

    #[test]
    fn test_case_conversions() {
        let cases = [
            ("Hello World", "lower", "hello world"),
            ("Hello World", "upper", "HELLO WORLD"),
            ("hello world", "title", "Hello World"),
            ("hello World", "sentence", "Hello world"),
            ("hello_world", "camel", "helloWorld"),
            ("hello_world", "pascal", "HelloWorld"),
            ("helloWorld", "snake", "hello_world"),
            ("helloWorld", "kebab", "hello-world"),
            ("hello123World", "snake", "hello123_world"),
        ];

        for (input, case, expected) in cases {
            let mut unit = CaseUnit::default();
            unit.configure_json(json!({ "case": case })).unwrap();
            let processed = unit.process(json!(input)).unwrap();
            assert_eq!(processed.value, json!(expected), "{} -> {}", input, case);
            assert!(processed.is_valid());
        }
    }

    #[test]
    fn test_defaults_to_lower() {
        let unit = CaseUnit::default();
        assert_eq!(unit.process(json!("ABC")).unwrap().value, json!("abc"));
    }

    #[test]
    fn test_non_string_input() {
        let unit = CaseUnit::new(Case::Snake);
        let processed = unit.process(json!(123)).unwrap();
        assert_eq!(processed.value, json!(""));
        assert_eq!(processed.error_key(), "notString");
    }

    #[test]
    fn test_unknown_case_is_configuration_error() {
        let mut unit = CaseUnit::default();
        let err = unit.configure_json(json!({ "case": "shouty" })).unwrap_err();
        assert!(err.is_configuration());
    }
}
