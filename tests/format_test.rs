// Metric value formatting

use creative_cards_wasm::format::{format_number, format_value, PLACEHOLDER};
use creative_cards_wasm::FormatKind;
use serde_json::{json, Value};

fn fmt(value: Value, kind: &str) -> String {
    format_value(Some(&value), FormatKind::from_name(kind))
}

#[test]
fn test_number_is_locale_grouped() {
    assert_eq!(fmt(json!(1234), "number"), "1,234");
    assert_eq!(fmt(json!(1234567), "number"), "1,234,567");
    assert_eq!(fmt(json!(12), "number"), "12");
    assert_eq!(fmt(json!(1234.5678), "number"), "1,234.568");
    assert_eq!(fmt(json!(-9876543.21), "number"), "-9,876,543.21");
}

#[test]
fn test_currency_has_no_decimals() {
    assert_eq!(fmt(json!(1234.5), "currency"), "$1,235");
    assert_eq!(fmt(json!(1234.49), "currency"), "$1,234");
    assert_eq!(fmt(json!(0), "currency"), "$0");
    assert_eq!(fmt(json!(1000000), "currency"), "$1,000,000");
}

#[test]
fn test_percentage_has_two_decimals() {
    assert_eq!(fmt(json!(12.345), "percentage"), "12.35%");
    assert_eq!(fmt(json!(5), "percentage"), "5.00%");
    assert_eq!(fmt(json!(0.1), "percentage"), "0.10%");
    assert_eq!(fmt(json!(99.999), "percentage"), "100.00%");
}

#[test]
fn test_missing_values_use_placeholder() {
    for kind in ["number", "currency", "percentage", "text", "anything"] {
        assert_eq!(format_value(None, FormatKind::from_name(kind)), PLACEHOLDER);
        assert_eq!(fmt(Value::Null, kind), "—");
    }
}

#[test]
fn test_unknown_kind_is_textual() {
    assert_eq!(fmt(json!("Video"), "badge"), "Video");
    assert_eq!(fmt(json!(1234), "badge"), "1234");
    assert_eq!(fmt(json!(0.5), "badge"), "0.5");
    assert_eq!(fmt(json!(true), "badge"), "true");
}

#[test]
fn test_non_numeric_input_is_not_hidden() {
    assert_eq!(fmt(json!("twelve"), "number"), "NaN");
    assert_eq!(fmt(json!("twelve"), "currency"), "$NaN");
    assert_eq!(fmt(json!("twelve"), "percentage"), "NaN%");
}

#[test]
fn test_format_number_non_finite() {
    assert_eq!(format_number(f64::NAN, FormatKind::Number), "NaN");
    assert_eq!(format_number(f64::INFINITY, FormatKind::Currency), "$∞");
    assert_eq!(format_number(f64::INFINITY, FormatKind::Percentage), "Infinity%");
    assert_eq!(format_number(f64::NEG_INFINITY, FormatKind::Text), "-Infinity");
}
