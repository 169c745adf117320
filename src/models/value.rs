//! Row values
//!
//! A row is a flat JSON object keyed by column name. Values keep their JSON
//! shape so they can be handed back to the host untouched on interaction.

use serde_json::Value;

/// One data record: column name -> scalar value
pub type Row = serde_json::Map<String, Value>;

/// Host truthiness: `null`, `false`, `0`, `""` count as "no value"
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
