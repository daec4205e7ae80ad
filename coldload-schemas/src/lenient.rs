//! Lenient numeric fields
//!
//! Input documents come from hand-edited files and form exports, so a number
//! may arrive as `7`, `7.5`, `"7.5"` or `""`. Any value that does not parse
//! as a finite number is treated as absent, and the room default applies.
//! Zero is a real value and is kept.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Parse a number written as text, `None` if it is empty, malformed or not finite
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            log::warn!("Ignoring non-numeric value '{}', using default", text);
            None
        }
    }
}

/// `deserialize_with` helper for `Option<f64>` fields
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Raw>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Raw::Number(v)) if v.is_finite() => Some(v),
        Some(Raw::Text(text)) => parse_number(&text),
        Some(_) => {
            log::warn!("Ignoring non-numeric value, using default");
            None
        }
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Field {
        #[serde(default, deserialize_with = "number")]
        value: Option<f64>,
    }

    fn parse(json: &str) -> Option<f64> {
        serde_json::from_str::<Field>(json).unwrap().value
    }

    #[test]
    fn numbers_and_numeric_strings() {
        assert_eq!(parse(r#"{"value": 7}"#), Some(7.0));
        assert_eq!(parse(r#"{"value": 7.5}"#), Some(7.5));
        assert_eq!(parse(r#"{"value": " 7.5 "}"#), Some(7.5));
    }

    #[test]
    fn zero_is_kept() {
        assert_eq!(parse(r#"{"value": 0}"#), Some(0.0));
        assert_eq!(parse(r#"{"value": "0"}"#), Some(0.0));
    }

    #[test]
    fn junk_becomes_absent() {
        assert_eq!(parse(r#"{"value": ""}"#), None);
        assert_eq!(parse(r#"{"value": "abc"}"#), None);
        assert_eq!(parse(r#"{"value": null}"#), None);
        assert_eq!(parse(r#"{"value": true}"#), None);
        assert_eq!(parse(r#"{"value": [1, 2]}"#), None);
        assert_eq!(parse(r#"{}"#), None);
    }

    #[test]
    fn toml_integers_and_strings() {
        let f: Field = toml::from_str("value = 12").unwrap();
        assert_eq!(f.value, Some(12.0));
        let f: Field = toml::from_str("value = \"3.25\"").unwrap();
        assert_eq!(f.value, Some(3.25));
    }

    #[test]
    fn text_parsing() {
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("  "), None);
    }
}
