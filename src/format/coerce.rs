//! Numeric and textual coercion of row values
//!
//! Row values reach the formatter as whatever the host sent. These helpers
//! coerce them the way the host's scripting runtime would, so a malformed
//! string yields `NaN` text instead of an error.

use serde_json::Value;

/// Coerce a row value to a number (`NaN` when it is not numeric)
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_number(s),
        Value::Array(_) => parse_number(&to_js_string(value)),
        Value::Object(_) => f64::NAN,
    }
}

/// Parse a string as a numeric literal
///
/// Accepts surrounding whitespace, decimal and exponent notation, signed
/// `Infinity` and unsigned `0x` / `0o` / `0b` integer literals. The empty
/// string is zero.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&trimmed[2..], radix);
    }

    let is_decimal_literal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !is_decimal_literal {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }

    let mut total = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => total = total * radix as f64 + d as f64,
            None => return f64::NAN,
        }
    }
    total
}

/// Shortest round-trip text for a number, in the runtime's `String(n)` form
///
/// Integral values print without a fraction, very large and very small
/// magnitudes switch to exponent form (`1e+21`, `1.5e-7`).
pub fn number_to_js_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", n);
    }

    let exponent_form = format!("{:e}", n);
    match exponent_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => exponent_form,
    }
}

/// Textual representation of a row value
pub fn to_js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_js_string(n.as_f64().unwrap_or(f64::NAN)),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_number_decimal_forms() {
        assert_eq!(parse_number("42"), 42.0);
        assert_eq!(parse_number("  -3.5 "), -3.5);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("   "), 0.0);
    }

    #[test]
    fn test_parse_number_special_forms() {
        assert_eq!(parse_number("0x1F"), 31.0);
        assert_eq!(parse_number("0b101"), 5.0);
        assert_eq!(parse_number("0o17"), 15.0);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_number_rejects_non_numeric() {
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("12px").is_nan());
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("nan").is_nan());
        assert!(parse_number("1e").is_nan());
        assert!(parse_number("0x").is_nan());
    }

    #[test]
    fn test_to_number_for_value_kinds() {
        assert_eq!(to_number(&json!(true)), 1.0);
        assert_eq!(to_number(&json!([])), 0.0);
        assert_eq!(to_number(&json!(["7"])), 7.0);
        assert!(to_number(&json!([1, 2])).is_nan());
        assert!(to_number(&json!({"a": 1})).is_nan());
    }

    #[test]
    fn test_number_to_js_string() {
        assert_eq!(number_to_js_string(1234.0), "1234");
        assert_eq!(number_to_js_string(0.1), "0.1");
        assert_eq!(number_to_js_string(-0.0), "0");
        assert_eq!(number_to_js_string(1e21), "1e+21");
        assert_eq!(number_to_js_string(1.5e-7), "1.5e-7");
        assert_eq!(number_to_js_string(f64::NAN), "NaN");
    }

    #[test]
    fn test_to_js_string() {
        assert_eq!(to_js_string(&json!("Active")), "Active");
        assert_eq!(to_js_string(&json!(12)), "12");
        assert_eq!(to_js_string(&json!([1, null, "x"])), "1,,x");
        assert_eq!(to_js_string(&json!({})), "[object Object]");
    }
}
