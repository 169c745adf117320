//! Value-level helpers exposed to JavaScript

use super::helpers::{deserialize, serialize};
use crate::format::{format_number, format_value, PLACEHOLDER};
use crate::models::{FormatKind, RawStyle, StyleConfig};
use crate::theme::Theme;
use serde_json::Value;
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

/// Format a raw value as `number`, `currency`, `percentage` or plain text
#[wasm_bindgen(js_name = formatValue)]
pub fn format_value_js(value: JsValue, kind: &str) -> String {
    let kind = FormatKind::from_name(kind);

    if value.is_undefined() || value.is_null() {
        return format_value(None, kind);
    }
    // NaN and infinities have no JSON form
    if let Some(n) = value.as_f64() {
        return format_number(n, kind);
    }

    match serde_wasm_bindgen::from_value::<Value>(value) {
        Ok(value) => format_value(Some(&value), kind),
        Err(err) => {
            log::warn!("formatValue: unreadable value: {}", err);
            PLACEHOLDER.to_string()
        }
    }
}

/// Resolved CSS variables for a raw style object, keyed by property name
#[wasm_bindgen(js_name = themeVariables)]
pub fn theme_variables(style_js: JsValue) -> Result<JsValue, JsValue> {
    let raw: RawStyle = if style_js.is_undefined() || style_js.is_null() {
        RawStyle::default()
    } else {
        deserialize(style_js, "Style")?
    };

    let theme = Theme::from_style(&StyleConfig::from_raw(&raw));
    let variables: BTreeMap<&str, &str> = theme.variables().into_iter().collect();
    Ok(serialize(&variables, "Theme variables")?)
}
