//! Style configuration
//!
//! The host sends a partially populated style object whose entries may be
//! bare values or `{value, defaultValue}` wrappers. [`RawStyle`] mirrors that
//! shape; [`StyleConfig::from_raw`] fills every option up front so the layout
//! code never has to test for absence.

use super::value::is_truthy;
use crate::format::to_js_string;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_COLUMNS: u32 = 4;
pub const DEFAULT_CARD_SPACING: u32 = 16;
pub const DEFAULT_BORDER_RADIUS: u32 = 12;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 200;
pub const DEFAULT_PRIMARY_COLOR: &str = "#E31837";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";
pub const DEFAULT_TEXT_COLOR: &str = "#1A1A1A";
pub const DEFAULT_METRIC_BACKGROUND: &str = "#F8FAFC";

/// Style object as delivered by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawStyle {
    pub columns: Option<Value>,
    pub card_spacing: Option<Value>,
    pub border_radius: Option<Value>,
    pub image_height: Option<Value>,
    pub primary_color: Option<Value>,
    pub background_color: Option<Value>,
    pub text_color: Option<Value>,
    pub metric_background: Option<Value>,
    pub show_shadow: Option<Value>,
    pub show_dimensions: Option<Value>,
    pub show_metrics: Option<Value>,
    pub metrics_layout: Option<Value>,
}

/// Arrangement of the metric tiles, emitted as `metrics-<layout>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum MetricsLayout {
    #[default]
    Grid,
    Custom(String),
}

impl MetricsLayout {
    pub fn as_str(&self) -> &str {
        match self {
            MetricsLayout::Grid => "grid",
            MetricsLayout::Custom(name) => name,
        }
    }

    /// CSS modifier class for the metrics section
    pub fn css_class(&self) -> String {
        format!("metrics-{}", self.as_str())
    }
}

impl From<MetricsLayout> for String {
    fn from(layout: MetricsLayout) -> Self {
        layout.as_str().to_string()
    }
}

/// Style options with every default applied
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    pub columns: u32,
    pub card_spacing: u32,
    pub border_radius: u32,
    pub image_height: u32,
    pub primary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub metric_background: String,
    pub show_shadow: bool,
    pub show_dimensions: bool,
    pub show_metrics: bool,
    pub metrics_layout: MetricsLayout,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            card_spacing: DEFAULT_CARD_SPACING,
            border_radius: DEFAULT_BORDER_RADIUS,
            image_height: DEFAULT_IMAGE_HEIGHT,
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            metric_background: DEFAULT_METRIC_BACKGROUND.to_string(),
            show_shadow: false,
            show_dimensions: true,
            show_metrics: true,
            metrics_layout: MetricsLayout::Grid,
        }
    }
}

impl StyleConfig {
    /// Resolve a raw host style object, substituting defaults for anything
    /// missing, falsy or unusable
    ///
    /// Numeric options are whole counts of columns or pixels: a fractional
    /// value is truncated (`2.5` becomes `2`) and anything below 1 falls back
    /// to the default, rather than being passed through to CSS as given.
    pub fn from_raw(raw: &RawStyle) -> Self {
        Self {
            columns: whole_number(raw.columns.as_ref(), DEFAULT_COLUMNS),
            card_spacing: whole_number(raw.card_spacing.as_ref(), DEFAULT_CARD_SPACING),
            border_radius: whole_number(raw.border_radius.as_ref(), DEFAULT_BORDER_RADIUS),
            image_height: whole_number(raw.image_height.as_ref(), DEFAULT_IMAGE_HEIGHT),
            primary_color: color(raw.primary_color.as_ref(), DEFAULT_PRIMARY_COLOR),
            background_color: color(raw.background_color.as_ref(), DEFAULT_BACKGROUND_COLOR),
            text_color: color(raw.text_color.as_ref(), DEFAULT_TEXT_COLOR),
            metric_background: color(raw.metric_background.as_ref(), DEFAULT_METRIC_BACKGROUND),
            show_shadow: entry(raw.show_shadow.as_ref()).map_or(false, is_truthy),
            // Only an explicit `false` hides these sections
            show_dimensions: !matches!(
                entry(raw.show_dimensions.as_ref()),
                Some(Value::Bool(false))
            ),
            show_metrics: !matches!(entry(raw.show_metrics.as_ref()), Some(Value::Bool(false))),
            metrics_layout: metrics_layout(raw.metrics_layout.as_ref()),
        }
    }
}

/// Unwrap a host style entry of the form `{value, defaultValue}`
fn entry(raw: Option<&Value>) -> Option<&Value> {
    let value = raw?;
    match value {
        Value::Object(map) if map.contains_key("value") || map.contains_key("defaultValue") => map
            .get("value")
            .filter(|v| !v.is_null())
            .or_else(|| map.get("defaultValue"))
            .filter(|v| !v.is_null()),
        Value::Null => None,
        other => Some(other),
    }
}

fn whole_number(raw: Option<&Value>, default: u32) -> u32 {
    let parsed = match entry(raw) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n.is_finite() && n >= 1.0 && n <= u32::MAX as f64 => n.trunc() as u32,
        _ => default,
    }
}

fn color(raw: Option<&Value>, default: &str) -> String {
    let picked = match entry(raw) {
        Some(Value::Object(map)) => map.get("color").and_then(Value::as_str),
        Some(Value::String(s)) => Some(s.as_str()),
        _ => None,
    };

    match picked {
        Some(c) if !c.is_empty() => c.to_string(),
        _ => default.to_string(),
    }
}

fn metrics_layout(raw: Option<&Value>) -> MetricsLayout {
    match entry(raw) {
        Some(value) if is_truthy(value) => {
            let name = to_js_string(value);
            if name == "grid" {
                MetricsLayout::Grid
            } else {
                MetricsLayout::Custom(name)
            }
        }
        _ => MetricsLayout::Grid,
    }
}
