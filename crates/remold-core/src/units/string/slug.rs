//! URL slug generation

use crate::error::Result;
use crate::text::ascii::fold_for_slug;
use crate::unit::{keys, Configurable, Processed, Unit};
use indexmap::IndexMap;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::OnceLock;

const DEFAULT_SEPARATOR: &str = "-";

fn disallowed_chars() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^a-zA-Z0-9\-_]").expect("static slug pattern is valid"))
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlugOptions {
    pub separator: String,
    pub lowercase: bool,
    /// Literal replacements applied before anything else, merged over the
    /// defaults (`" "` → separator, `&` → `and`, `@` → `at`), in the order
    /// they are written
    pub replacements: IndexMap<String, String>,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            lowercase: true,
            replacements: IndexMap::new(),
        }
    }
}

/// Builds URL-friendly slugs from free text
#[derive(Debug, Clone)]
pub struct SlugUnit {
    separator: String,
    lowercase: bool,
    replacements: Vec<(String, String)>,
}

impl Default for SlugUnit {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            lowercase: true,
            replacements: default_replacements(DEFAULT_SEPARATOR),
        }
    }
}

fn default_replacements(separator: &str) -> Vec<(String, String)> {
    vec![
        (" ".to_string(), separator.to_string()),
        ("&".to_string(), "and".to_string()),
        ("@".to_string(), "at".to_string()),
    ]
}

impl Configurable for SlugUnit {
    type Options = SlugOptions;

    fn configure(&mut self, options: SlugOptions) -> Result<()> {
        let mut replacements = default_replacements(&options.separator);
        for (from, to) in options.replacements {
            if from.is_empty() {
                continue;
            }
            match replacements.iter_mut().find(|(existing, _)| *existing == from) {
                Some(entry) => entry.1 = to,
                None => replacements.push((from, to)),
            }
        }

        self.separator = options.separator;
        self.lowercase = options.lowercase;
        self.replacements = replacements;
        Ok(())
    }
}

impl SlugUnit {
    fn slugify(&self, input: &str) -> String {
        let mut text = input.to_string();
        for (from, to) in &self.replacements {
            text = text.replace(from.as_str(), to);
        }

        let mut text = fold_for_slug(&text);
        if self.lowercase {
            text = text.to_lowercase();
        }

        let text = disallowed_chars().replace_all(&text, self.separator.as_str());
        if self.separator.is_empty() {
            return text.into_owned();
        }

        let doubled = format!("{}{}", self.separator, self.separator);
        let mut text = text.into_owned();
        while text.contains(&doubled) {
            text = text.replace(&doubled, &self.separator);
        }

        let sep = self.separator.as_str();
        let mut slug = text.as_str();
        while let Some(rest) = slug.strip_prefix(sep) {
            slug = rest;
        }
        while let Some(rest) = slug.strip_suffix(sep) {
            slug = rest;
        }
        slug.to_string()
    }
}

impl Unit for SlugUnit {
    fn name(&self) -> &str {
        "slug"
    }

    fn process(&self, input: Value) -> Result<Processed> {
        let Some(text) = input.as_str() else {
            return Ok(Processed::invalid(Value::String(String::new()), keys::NOT_STRING));
        };

        let slug = self.slugify(text);
        if slug.is_empty() {
            return Ok(Processed::invalid(Value::String(slug), keys::EMPTY_SLUG));
        }
        Ok(Processed::valid(Value::String(slug)))
    }
}
