//! Value formatting for metric tiles and text nodes
//!
//! `format_value` is total: every input produces display text. Missing values
//! become an em-dash; values that do not coerce to numbers show up as `NaN`
//! text rather than being hidden.

pub mod coerce;
pub mod decimal;

pub use coerce::{number_to_js_string, parse_number, to_js_string, to_number};
pub use decimal::{to_fixed, to_locale_string};

use crate::models::FormatKind;
use serde_json::Value;

/// Shown for missing values
pub const PLACEHOLDER: &str = "—";

/// Default fraction digit cap of the locale number format
const LOCALE_MAX_FRACTION_DIGITS: usize = 3;

/// Format an optional row value
pub fn format_value(value: Option<&Value>, kind: FormatKind) -> String {
    match value {
        None | Some(Value::Null) => PLACEHOLDER.to_string(),
        Some(value) => match kind {
            FormatKind::Text => to_js_string(value),
            numeric => format_number(to_number(value), numeric),
        },
    }
}

/// Format an already-coerced number
pub fn format_number(n: f64, kind: FormatKind) -> String {
    match kind {
        FormatKind::Currency => format!("${}", to_locale_string(n, 0, 0)),
        FormatKind::Percentage => format!("{}%", to_fixed(n, 2)),
        FormatKind::Number => to_locale_string(n, 0, LOCALE_MAX_FRACTION_DIGITS),
        FormatKind::Text => number_to_js_string(n),
    }
}
