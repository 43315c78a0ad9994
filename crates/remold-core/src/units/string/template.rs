//! Placeholder template rendering
//!
//! Renders a flat object into a template such as `Hello {{name}}!`. Keys are
//! looked up by exact, whitespace-trimmed match; there are no nested paths
//! and no logic.

use crate::error::{Error, Result};
use crate::unit::{keys, Configurable, Processed, Unit};
use regex::{Captures, Regex};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Field that receives the rendered string when the source data is preserved
pub const RENDERED_FIELD: &str = "_rendered";

const DEFAULT_OPEN_TAG: &str = "{{";
const DEFAULT_CLOSE_TAG: &str = "}}";

/// Produces the replacement text for a key missing from the data
pub type MissingValueHandler = Arc<dyn Fn(&str) -> String + Send + Sync>;

#[derive(Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateOptions {
    pub template: String,
    pub open_tag: String,
    pub close_tag: String,
    pub remove_unmatched_tags: bool,
    /// Return the input object with the rendered string under `_rendered`
    /// instead of the rendered string alone
    pub preserve_data: bool,
    #[serde(skip)]
    pub missing_value_handler: Option<MissingValueHandler>,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            template: String::new(),
            open_tag: DEFAULT_OPEN_TAG.to_string(),
            close_tag: DEFAULT_CLOSE_TAG.to_string(),
            remove_unmatched_tags: false,
            preserve_data: false,
            missing_value_handler: None,
        }
    }
}

impl TemplateOptions {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Self::default()
        }
    }

    pub fn on_missing<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.missing_value_handler = Some(Arc::new(handler));
        self
    }
}

/// Renders object data into a placeholder template
#[derive(Clone)]
pub struct TemplateUnit {
    template: String,
    pattern: Regex,
    remove_unmatched_tags: bool,
    preserve_data: bool,
    missing_value_handler: Option<MissingValueHandler>,
}

fn placeholder_pattern(open_tag: &str, close_tag: &str) -> Result<Regex> {
    if open_tag.is_empty() || close_tag.is_empty() {
        return Err(Error::configuration("template", "Template tags must not be empty"));
    }
    let pattern = format!(
        r"{}\s*(.+?)\s*{}",
        regex::escape(open_tag),
        regex::escape(close_tag)
    );
    Regex::new(&pattern).map_err(|e| {
        Error::configuration("template", format!("Invalid template tags: {}", e))
    })
}

impl Default for TemplateUnit {
    fn default() -> Self {
        Self {
            template: String::new(),
            pattern: placeholder_pattern(DEFAULT_OPEN_TAG, DEFAULT_CLOSE_TAG)
                .expect("escaped default tags form a valid pattern"),
            remove_unmatched_tags: false,
            preserve_data: false,
            missing_value_handler: None,
        }
    }
}

impl Configurable for TemplateUnit {
    type Options = TemplateOptions;

    fn configure(&mut self, options: TemplateOptions) -> Result<()> {
        self.pattern = placeholder_pattern(&options.open_tag, &options.close_tag)?;
        self.template = options.template;
        self.remove_unmatched_tags = options.remove_unmatched_tags;
        self.preserve_data = options.preserve_data;
        self.missing_value_handler = options.missing_value_handler;
        Ok(())
    }
}

impl TemplateUnit {
    /// Substitute every placeholder of the configured template
    pub fn render(&self, data: &Map<String, Value>) -> String {
        self.pattern
            .replace_all(&self.template, |caps: &Captures| {
                let key = caps[1].trim();
                match data.get(key) {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Null) | None => self.on_miss(key, &caps[0]),
                    Some(other) => other.to_string(),
                }
            })
            .into_owned()
    }

    fn on_miss(&self, key: &str, placeholder: &str) -> String {
        if let Some(handler) = &self.missing_value_handler {
            return handler(key);
        }
        if self.remove_unmatched_tags {
            String::new()
        } else {
            placeholder.to_string()
        }
    }
}

impl Unit for TemplateUnit {
    fn name(&self) -> &str {
        "template"
    }

    fn process(&self, input: Value) -> Result<Processed> {
        let Value::Object(data) = input else {
            return Ok(Processed::invalid(input, keys::NOT_ARRAY));
        };
        if self.template.is_empty() {
            return Ok(Processed::invalid(Value::Object(data), keys::NO_TEMPLATE));
        }

        let rendered = self.render(&data);
        if !self.preserve_data {
            return Ok(Processed::valid(Value::String(rendered)));
        }

        let mut data = data;
        data.insert(RENDERED_FIELD.to_string(), Value::String(rendered));
        Ok(Processed::valid(Value::Object(data)))
    }
}

impl fmt::Debug for TemplateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateUnit")
            .field("template", &self.template)
            .field("pattern", &self.pattern.as_str())
            .field("remove_unmatched_tags", &self.remove_unmatched_tags)
            .field("preserve_data", &self.preserve_data)
            .field("missing_value_handler", &self.missing_value_handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::ConfigureFromJson;
    use serde_json::json;

    fn render(data: Value, options: Value) -> Processed {
        let mut unit = TemplateUnit::default();
        unit.configure_json(options).unwrap();
        unit.process(data).unwrap()
    }

    #[test]
    fn test_render_returns_string_by_default() {
        let processed = render(
            json!({"name": "John", "age": "30"}),
            json!({"template": "{{name}} is {{age}}"}),
        );
        assert_eq!(processed.value, json!("John is 30"));
        assert!(processed.is_valid());
    }

    #[test]
    fn test_render_preserving_data() {
        let processed = render(
            json!({"name": "John"}),
            json!({"template": "Hello {{name}}!", "preserveData": true}),
        );
        assert_eq!(processed.value, json!({"name": "John", "_rendered": "Hello John!"}));
    }

    #[test]
    fn test_custom_tags_and_whitespace() {
        let processed = render(
            json!({"name": "John"}),
            json!({"template": "Hello [ name ]!", "openTag": "[", "closeTag": "]"}),
        );
        assert_eq!(processed.value, json!("Hello John!"));
    }

    #[test]
    fn test_non_string_values_use_json_text() {
        let processed = render(
            json!({"count": 3, "ok": true}),
            json!({"template": "{{count}}/{{ok}}"}),
        );
        assert_eq!(processed.value, json!("3/true"));
    }

    #[test]
    fn test_unmatched_tags() {
        let kept = render(
            json!({"name": "John"}),
            json!({"template": "{{name}} {{missing}}"}),
        );
        assert_eq!(kept.value, json!("John {{missing}}"));

        let removed = render(
            json!({"name": "John", "missing": null}),
            json!({"template": "{{name}} {{missing}}", "removeUnmatchedTags": true}),
        );
        assert_eq!(removed.value, json!("John "));
    }

    #[test]
    fn test_missing_value_handler() {
        let options = TemplateOptions {
            remove_unmatched_tags: true,
            ..TemplateOptions::new("{{name}} {{missing}}")
        }
        .on_missing(|key| format!("[{}]", key));
        let unit = TemplateUnit::with_options(options).unwrap();

        let processed = unit.process(json!({"name": "John"})).unwrap();
        assert_eq!(processed.value, json!("John [missing]"));
    }

    #[test]
    fn test_invalid_input_and_missing_template() {
        let processed = render(json!("not an object"), json!({"template": "test"}));
        assert_eq!(processed.value, json!("not an object"));
        assert_eq!(processed.error_key(), "notArray");

        let processed = TemplateUnit::default().process(json!({"test": "value"})).unwrap();
        assert_eq!(processed.value, json!({"test": "value"}));
        assert_eq!(processed.error_key(), "noTemplate");
    }

    #[test]
    fn test_empty_tags_rejected() {
        let mut unit = TemplateUnit::default();
        assert!(unit.configure_json(json!({"template": "x", "openTag": ""})).is_err());
    }
}
