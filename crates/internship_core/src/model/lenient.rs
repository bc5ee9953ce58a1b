//! Tolerant field codecs for data written by older front-ends.
//!
//! Numbers may be stored as JSON numbers, numeric strings or garbage; text
//! fields may be missing or hold non-string scalars.

use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
const EXPONENT_ABOVE: f64 = 1e21;
const EXPONENT_BELOW: f64 = 1e-6;

/// Parses user-entered numeric text. Empty or non-finite input is `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Formats a number the way it is shown in tables: `85`, `7.5`, `1e+21`.
///
/// Magnitudes from 1e21 up and below 1e-6 use exponent notation, matching
/// how a browser prints the same stored value.
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if value.fract() == 0.0 && magnitude <= MAX_SAFE_INTEGER {
        // Normalizes -0 to 0.
        format!("{}", value as i64)
    } else if magnitude >= EXPONENT_ABOVE || (magnitude != 0.0 && magnitude < EXPONENT_BELOW) {
        let formatted = format!("{value:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        }
    } else {
        format!("{value}")
    }
}

pub(crate) fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => parse_number(&text).unwrap_or(0.0),
        Value::Bool(true) => 1.0,
        _ => 0.0,
    })
}

pub(crate) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    })
}

/// Whole numbers are written as JSON integers.
pub(crate) fn write_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::{format_number, parse_number};

    #[test]
    fn parse_number_rejects_empty_and_non_numeric() {
        assert_eq!(parse_number(" 85 "), Some(85.0));
        assert_eq!(parse_number("7.5"), Some(7.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn format_number_switches_to_exponent_at_extremes() {
        assert_eq!(format_number(1e300), "1e+300");
        assert_eq!(format_number(-2.5e21), "-2.5e+21");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn format_number_drops_trailing_zero_fraction() {
        assert_eq!(format_number(85.0), "85");
        assert_eq!(format_number(7.5), "7.5");
        assert_eq!(format_number(-0.0), "0");
    }
}
