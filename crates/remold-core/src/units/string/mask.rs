//! Positional mask application
//!
//! A mask such as `(##) ####-####` interleaves literal characters with
//! characters consumed from the input, one per placeholder.

use crate::error::{Error, Result};
use crate::unit::{keys, Configurable, Processed, Unit};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

pub const DEFAULT_PLACEHOLDER: char = '#';

/// Named masks available through the `type` option
pub static DEFAULT_MASKS: &[(&str, &str)] = &[
    ("phone", "(##) #####-####"),
    ("cpf", "###.###.###-##"),
    ("cnpj", "##.###.###/####-##"),
    ("cep", "#####-###"),
];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaskOptions {
    /// Explicit pattern; takes precedence over `type`
    pub mask: Option<String>,
    /// Name of a built-in or custom mask
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Extra named masks, overriding built-ins with the same name
    pub custom_masks: HashMap<String, String>,
    pub placeholder: Option<String>,
}

/// Formats a string through a positional mask
#[derive(Debug, Clone)]
pub struct MaskUnit {
    mask: Option<String>,
    placeholder: char,
}

impl Default for MaskUnit {
    fn default() -> Self {
        Self {
            mask: None,
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }
}

impl MaskUnit {
    pub fn new(mask: impl Into<String>) -> Self {
        Self {
            mask: Some(mask.into()),
            ..Self::default()
        }
    }

    pub fn mask(&self) -> Option<&str> {
        self.mask.as_deref()
    }
}

impl Configurable for MaskUnit {
    type Options = MaskOptions;

    fn configure(&mut self, options: MaskOptions) -> Result<()> {
        if let Some(placeholder) = options.placeholder {
            let mut chars = placeholder.chars();
            self.placeholder = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(Error::configuration(
                        self.name(),
                        format!("Placeholder must be a single character, got '{}'", placeholder),
                    ))
                }
            };
        }

        let explicit = options.mask.filter(|m| !m.is_empty());
        self.mask = match (explicit, options.kind) {
            (Some(mask), _) => Some(mask),
            (None, Some(kind)) => options
                .custom_masks
                .get(&kind)
                .cloned()
                .or_else(|| {
                    DEFAULT_MASKS
                        .iter()
                        .find(|(name, _)| *name == kind)
                        .map(|(_, mask)| mask.to_string())
                })
                .filter(|m| !m.is_empty()),
            (None, None) => None,
        };

        if self.mask.is_none() {
            log::debug!("mask unit configured without a resolvable mask");
        }
        Ok(())
    }
}

impl Unit for MaskUnit {
    fn name(&self) -> &str {
        "mask"
    }

    fn process(&self, input: Value) -> Result<Processed> {
        if !input.is_string() {
            return Ok(Processed::invalid(input, keys::NOT_STRING));
        }
        let Some(mask) = self.mask.as_deref() else {
            return Ok(Processed::invalid(input, keys::NO_MASK));
        };
        let text = input.as_str().unwrap_or_default();
        Ok(Processed::valid(Value::String(apply_mask(text, mask, self.placeholder))))
    }
}

/// Walk `mask`, replacing each `placeholder` with the next input character.
///
/// Output stops as soon as either the mask or the input runs out, so
/// trailing literals after the last consumed character are dropped, as is
/// any input the mask has no room for.
pub fn apply_mask(input: &str, mask: &str, placeholder: char) -> String {
    let mut source = input.chars().peekable();
    let mut out = String::with_capacity(mask.len());

    for m in mask.chars() {
        if source.peek().is_none() {
            break;
        }
        if m == placeholder {
            if let Some(c) = source.next() {
                out.push(c);
            }
        } else {
            out.push(m);
        }
    }

    out
}
