//! Numeric rounding and formatting

use crate::error::{Error, Result};
use crate::unit::{keys, Configurable, Processed, Unit};
use serde::Deserialize;
use serde_json::{Number, Value};

/// Most decimal places an `f64` can round to meaningfully
pub const MAX_DECIMALS: u32 = 15;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberOptions {
    pub decimals: u32,
    pub decimal_point: String,
    pub thousands_separator: String,
    pub multiplier: Option<f64>,
    /// Round towards positive infinity instead of half away from zero
    pub round_up: bool,
    pub format_as_string: bool,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            decimals: 2,
            decimal_point: ".".to_string(),
            thousands_separator: String::new(),
            multiplier: None,
            round_up: false,
            format_as_string: false,
        }
    }
}

/// Rounds numbers and optionally renders them with custom separators
#[derive(Debug, Clone, Default)]
pub struct NumberUnit {
    options: NumberOptions,
}

impl Configurable for NumberUnit {
    type Options = NumberOptions;

    fn configure(&mut self, options: NumberOptions) -> Result<()> {
        if options.decimals > MAX_DECIMALS {
            return Err(Error::configuration(
                self.name(),
                format!(
                    "decimals must be at most {}, got {}",
                    MAX_DECIMALS, options.decimals
                ),
            ));
        }
        self.options = options;
        Ok(())
    }
}

fn numeric(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// Insert `separator` between groups of three digits of an unsigned integer
fn group_thousands(digits: &str, separator: &str) -> String {
    if separator.is_empty() {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

impl NumberUnit {
    fn round(&self, number: f64) -> f64 {
        let factor = 10f64.powi(self.options.decimals as i32);
        let scaled = number * factor;
        let rounded = if self.options.round_up {
            scaled.ceil()
        } else {
            scaled.round()
        };
        rounded / factor
    }

    fn format(&self, number: f64) -> String {
        let fixed = format!("{:.*}", self.options.decimals as usize, number.abs());
        let (integer, fraction) = match fixed.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut out = String::new();
        if number < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
            out.push('-');
        }
        out.push_str(&group_thousands(integer, &self.options.thousands_separator));
        if let Some(fraction) = fraction {
            out.push_str(&self.options.decimal_point);
            out.push_str(fraction);
        }
        out
    }

    fn to_json(&self, number: f64) -> Option<Value> {
        if self.options.decimals == 0 && number.abs() < i64::MAX as f64 {
            return Some(Value::Number(Number::from(number as i64)));
        }
        Number::from_f64(number).map(Value::Number)
    }
}

impl Unit for NumberUnit {
    fn name(&self) -> &str {
        "number"
    }

    fn process(&self, input: Value) -> Result<Processed> {
        let not_numeric = || Processed::invalid(Value::String(String::new()), keys::NOT_NUMERIC);

        let Some(mut number) = numeric(&input) else {
            return Ok(not_numeric());
        };
        if let Some(multiplier) = self.options.multiplier {
            number *= multiplier;
        }
        let rounded = self.round(number);
        if !rounded.is_finite() {
            return Ok(not_numeric());
        }

        if self.options.format_as_string {
            return Ok(Processed::valid(Value::String(self.format(rounded))));
        }
        Ok(match self.to_json(rounded) {
            Some(value) => Processed::valid(value),
            None => not_numeric(),
        })
    }
}
