use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

pub const PERCENTAGE_MIN: f64 = 0.0;
pub const PERCENTAGE_MAX: f64 = 100.0;

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("valid number regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    /// Probability in `[0, 1]`. Strings above 1 are read as a 0-100 scale.
    Confidence,
    /// Value on a 0-100 scale, clamped into range.
    Percentage,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coerced {
    pub value: f64,
    /// Original value when it had to be clamped into range.
    pub clamped_from: Option<f64>,
}

impl Coerced {
    fn exact(value: f64) -> Self {
        Self {
            value,
            clamped_from: None,
        }
    }
}

/// Converts a resolved JSON value into a float of the given kind.
///
/// Returns `None` for values that carry no usable number: empty or
/// non-numeric strings, `NaN`, infinities, booleans, arrays and objects.
pub fn coerce(raw: &Value, kind: NumericKind) -> Option<Coerced> {
    match raw {
        Value::Number(number) => {
            let value = number.as_f64().filter(|v| v.is_finite())?;
            Some(apply_range(value, kind))
        }
        Value::String(text) => {
            let parsed = parse_numeric_text(text)?;
            let value = match kind {
                NumericKind::Confidence if parsed > 1.0 => parsed / 100.0,
                _ => parsed,
            };
            Some(apply_range(value, kind))
        }
        _ => None,
    }
}

fn apply_range(value: f64, kind: NumericKind) -> Coerced {
    match kind {
        NumericKind::Confidence => Coerced::exact(value),
        NumericKind::Percentage => {
            let clamped = value.clamp(PERCENTAGE_MIN, PERCENTAGE_MAX);
            if clamped == value {
                Coerced::exact(value)
            } else {
                Coerced {
                    value: clamped,
                    clamped_from: Some(value),
                }
            }
        }
    }
}

/// Strips `%` signs and reads the leading number, so `"%95"`, `"95 %"` and
/// `"95 percent"` all give `95`.
pub fn parse_numeric_text(text: &str) -> Option<f64> {
    let stripped = text.replace('%', "");
    let trimmed = stripped.trim();

    LEADING_NUMBER
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn value_of(raw: Value, kind: NumericKind) -> Option<f64> {
        coerce(&raw, kind).map(|c| c.value)
    }

    #[test]
    fn test_confidence_percentage_string() {
        assert_eq!(value_of(json!("95%"), NumericKind::Confidence), Some(0.95));
        assert_eq!(value_of(json!("%95"), NumericKind::Confidence), Some(0.95));
    }

    #[test]
    fn test_confidence_plain_string() {
        assert_eq!(value_of(json!("0.5"), NumericKind::Confidence), Some(0.5));
        assert_eq!(value_of(json!(" 80 "), NumericKind::Confidence), Some(0.8));
        assert_eq!(value_of(json!("1"), NumericKind::Confidence), Some(1.0));
    }

    #[test]
    fn test_confidence_number_is_used_as_is() {
        assert_eq!(value_of(json!(95), NumericKind::Confidence), Some(95.0));
        assert_eq!(value_of(json!(0.42), NumericKind::Confidence), Some(0.42));
    }

    #[test]
    fn test_unusable_values_are_absent() {
        for raw in [
            json!(""),
            json!("   "),
            json!("%"),
            json!("high"),
            json!("NaN"),
            json!("inf"),
            json!("Infinity"),
            json!(true),
            json!([0.5]),
            json!({ "value": 0.5 }),
            Value::Null,
        ] {
            assert_eq!(value_of(raw.clone(), NumericKind::Confidence), None, "{raw}");
            assert_eq!(value_of(raw.clone(), NumericKind::Percentage), None, "{raw}");
        }
    }

    #[test]
    fn test_leading_number_is_read_from_prose() {
        assert_eq!(parse_numeric_text("95 percent"), Some(95.0));
        assert_eq!(parse_numeric_text("12.5% of leaves"), Some(12.5));
        assert_eq!(parse_numeric_text("-3"), Some(-3.0));
        assert_eq!(parse_numeric_text(".5"), Some(0.5));
        assert_eq!(parse_numeric_text("about 40"), None);
    }

    #[test]
    fn test_percentage_in_range_is_untouched() {
        let coerced = coerce(&json!("65%"), NumericKind::Percentage).unwrap();
        assert_eq!(coerced.value, 65.0);
        assert_eq!(coerced.clamped_from, None);

        assert_eq!(value_of(json!(45), NumericKind::Percentage), Some(45.0));
        assert_eq!(value_of(json!("0.5"), NumericKind::Percentage), Some(0.5));
    }

    #[test]
    fn test_percentage_above_range_is_clamped() {
        let coerced = coerce(&json!("150%"), NumericKind::Percentage).unwrap();
        assert_eq!(coerced.value, 100.0);
        assert_eq!(coerced.clamped_from, Some(150.0));

        assert_eq!(value_of(json!(250), NumericKind::Percentage), Some(100.0));
    }

    #[test]
    fn test_percentage_below_range_is_clamped() {
        let coerced = coerce(&json!(-5), NumericKind::Percentage).unwrap();
        assert_eq!(coerced.value, 0.0);
        assert_eq!(coerced.clamped_from, Some(-5.0));
    }
}
