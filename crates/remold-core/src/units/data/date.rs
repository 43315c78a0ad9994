//! Date parsing, timezone conversion and reformatting
//!
//! Formats use chrono's strftime syntax. Timezones are fixed offsets:
//! `UTC`, `Z`, `GMT`, `+HH:MM`, `+HHMM` or `+HH` (and their negative forms).

use crate::error::{Error, Result};
use crate::unit::{keys, Configurable, Processed, Unit};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use serde::Deserialize;
use serde_json::Value;
use std::fmt::Write;

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DateOptions {
    pub input_format: String,
    pub output_format: String,
    pub input_timezone: Option<String>,
    pub output_timezone: Option<String>,
}

impl Default for DateOptions {
    fn default() -> Self {
        Self {
            input_format: DEFAULT_DATE_FORMAT.to_string(),
            output_format: DEFAULT_DATE_FORMAT.to_string(),
            input_timezone: None,
            output_timezone: None,
        }
    }
}

/// Reads dates in one format and timezone and writes them in another
#[derive(Debug, Clone)]
pub struct DateUnit {
    input_format: String,
    output_format: String,
    input_timezone: Option<FixedOffset>,
    output_timezone: Option<FixedOffset>,
}

impl Default for DateUnit {
    fn default() -> Self {
        Self {
            input_format: DEFAULT_DATE_FORMAT.to_string(),
            output_format: DEFAULT_DATE_FORMAT.to_string(),
            input_timezone: None,
            output_timezone: None,
        }
    }
}

/// Parse a fixed-offset timezone name
pub fn parse_timezone(name: &str) -> Option<FixedOffset> {
    let name = name.trim();
    if ["utc", "z", "gmt"].iter().any(|alias| name.eq_ignore_ascii_case(alias)) {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = match name.as_bytes().first()? {
        b'+' => (1, &name[1..]),
        b'-' => (-1, &name[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) || rest.matches(':').count() > 1 {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        2 if !rest.contains(':') => (digits.parse::<i32>().ok()?, 0),
        4 if !rest.contains(':') || rest.find(':') == Some(2) => {
            (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?)
        }
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

fn check_format(unit: &str, option: &str, format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(Error::configuration(
            unit,
            format!("Invalid {} '{}'", option, format),
        ));
    }
    Ok(())
}

impl Configurable for DateUnit {
    type Options = DateOptions;

    fn configure(&mut self, options: DateOptions) -> Result<()> {
        let timezone = |option: &str, value: Option<String>| -> Result<Option<FixedOffset>> {
            match value.filter(|tz| !tz.trim().is_empty()) {
                None => Ok(None),
                Some(tz) => parse_timezone(&tz).map(Some).ok_or_else(|| {
                    Error::configuration("date", format!("Unknown {} '{}'", option, tz))
                }),
            }
        };

        check_format(self.name(), "inputFormat", &options.input_format)?;
        check_format(self.name(), "outputFormat", &options.output_format)?;
        self.input_timezone = timezone("inputTimezone", options.input_timezone)?;
        self.output_timezone = timezone("outputTimezone", options.output_timezone)?;
        self.input_format = options.input_format;
        self.output_format = options.output_format;
        Ok(())
    }
}

impl DateUnit {
    fn parse(&self, text: &str) -> Option<DateTime<FixedOffset>> {
        if let Ok(dt) = DateTime::parse_from_str(text, &self.input_format) {
            return Some(dt);
        }

        let naive = NaiveDateTime::parse_from_str(text, &self.input_format)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(text, &self.input_format)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })?;
        let zone = match self.input_timezone {
            Some(zone) => zone,
            None => FixedOffset::east_opt(0)?,
        };
        zone.from_local_datetime(&naive).single()
    }

    fn convert(&self, text: &str) -> Option<String> {
        let parsed = self.parse(text)?;
        let zone = self.output_timezone.unwrap_or_else(|| *parsed.offset());
        let converted = parsed.with_timezone(&zone);

        let mut out = String::new();
        write!(out, "{}", converted.format(&self.output_format)).ok()?;
        Some(out)
    }
}

impl Unit for DateUnit {
    fn name(&self) -> &str {
        "date"
    }

    fn process(&self, input: Value) -> Result<Processed> {
        let Some(text) = input.as_str() else {
            return Ok(Processed::invalid(Value::String(String::new()), keys::NOT_STRING));
        };

        match self.convert(text.trim()) {
            Some(formatted) => Ok(Processed::valid(Value::String(formatted))),
            None => Ok(Processed::invalid(Value::String(String::new()), keys::INVALID_DATE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::ConfigureFromJson;
    use serde_json::json;

    fn date(input: Value, options: Value) -> Processed {
        let mut unit = DateUnit::default();
        unit.configure_json(options).unwrap();
        unit.process(input).unwrap()
    }

    #[test]
    fn test_reformat_date() {
        let processed = date(
            json!("15/03/2024"),
            json!({"inputFormat": "%d/%m/%Y", "outputFormat": "%Y-%m-%d"}),
        );
        assert_eq!(processed.value, json!("2024-03-15"));
        assert!(processed.is_valid());

        let processed = date(json!("2024-03-15"), json!({"outputFormat": "%d.%m.%Y %H:%M"}));
        assert_eq!(processed.value, json!("15.03.2024 00:00"));
    }

    #[test]
    fn test_timezone_conversion() {
        let processed = date(
            json!("2024-01-01 23:30:00"),
            json!({
                "inputFormat": "%Y-%m-%d %H:%M:%S",
                "outputFormat": "%Y-%m-%d %H:%M",
                "inputTimezone": "UTC",
                "outputTimezone": "+02:00"
            }),
        );
        assert_eq!(processed.value, json!("2024-01-02 01:30"));

        let processed = date(
            json!("2024-01-01 01:00"),
            json!({
                "inputFormat": "%Y-%m-%d %H:%M",
                "outputFormat": "%Y-%m-%d %H:%M %z",
                "inputTimezone": "-0300"
            }),
        );
        assert_eq!(processed.value, json!("2024-01-01 01:00 -0300"));
    }

    #[test]
    fn test_embedded_offset_is_honored() {
        let processed = date(
            json!("2024-06-01 12:00 +0200"),
            json!({
                "inputFormat": "%Y-%m-%d %H:%M %z",
                "outputFormat": "%H:%M",
                "outputTimezone": "Z"
            }),
        );
        assert_eq!(processed.value, json!("10:00"));
    }

    #[test]
    fn test_invalid_input() {
        let processed = date(json!("not a date"), json!({}));
        assert_eq!(processed.value, json!(""));
        assert_eq!(processed.error_key(), "invalidDate");

        let processed = date(json!(20240315), json!({}));
        assert_eq!(processed.value, json!(""));
        assert_eq!(processed.error_key(), "notString");
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone("GMT"), FixedOffset::east_opt(0));
        assert_eq!(parse_timezone("+05:30"), FixedOffset::east_opt(19800));
        assert_eq!(parse_timezone("-0800"), FixedOffset::west_opt(8 * 3600));
        assert_eq!(parse_timezone("+09"), FixedOffset::east_opt(9 * 3600));
        assert_eq!(parse_timezone("Europe/Paris"), None);
        assert_eq!(parse_timezone("+25:00"), None);
        assert_eq!(parse_timezone("+0:30"), None);
        assert_eq!(parse_timezone("+0:9"), None);
    }

    #[test]
    fn test_configuration_errors() {
        let mut unit = DateUnit::default();
        assert!(unit
            .configure_json(json!({"inputTimezone": "Mars/Olympus"}))
            .unwrap_err()
            .is_configuration());
        assert!(unit
            .configure_json(json!({"outputFormat": "%Q"}))
            .unwrap_err()
            .is_configuration());
        assert!(unit.configure_json(json!({"outputTimezone": ""})).is_ok());
    }
}
