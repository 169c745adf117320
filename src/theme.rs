//! Presentation variables
//!
//! The stylesheet shipped with the visualization reads its sizes, colors and
//! shadows from CSS custom properties on the document root. [`Theme`] is the
//! resolved value of those properties for one render.

use crate::models::StyleConfig;
use serde::Serialize;

pub const RESTING_SHADOW: &str =
    "0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px 0 rgba(0, 0, 0, 0.06)";
pub const HOVER_SHADOW: &str =
    "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)";
pub const NO_SHADOW: &str = "none";

/// Values of the root CSS variables
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub columns: String,
    pub card_spacing: String,
    pub border_radius: String,
    pub image_height: String,
    pub primary_color: String,
    pub bg_color: String,
    pub text_color: String,
    pub metric_bg: String,
    pub card_shadow: String,
    pub card_shadow_hover: String,
}

impl Theme {
    pub fn from_style(style: &StyleConfig) -> Self {
        let (card_shadow, card_shadow_hover) = if style.show_shadow {
            (RESTING_SHADOW, HOVER_SHADOW)
        } else {
            (NO_SHADOW, NO_SHADOW)
        };

        Self {
            columns: style.columns.to_string(),
            card_spacing: px(style.card_spacing),
            border_radius: px(style.border_radius),
            image_height: px(style.image_height),
            primary_color: style.primary_color.clone(),
            bg_color: style.background_color.clone(),
            text_color: style.text_color.clone(),
            metric_bg: style.metric_background.clone(),
            card_shadow: card_shadow.to_string(),
            card_shadow_hover: card_shadow_hover.to_string(),
        }
    }

    /// `(property name, value)` pairs in a fixed order
    pub fn variables(&self) -> [(&'static str, &str); 10] {
        [
            ("--columns", self.columns.as_str()),
            ("--card-spacing", self.card_spacing.as_str()),
            ("--border-radius", self.border_radius.as_str()),
            ("--image-height", self.image_height.as_str()),
            ("--primary-color", self.primary_color.as_str()),
            ("--bg-color", self.bg_color.as_str()),
            ("--text-color", self.text_color.as_str()),
            ("--metric-bg", self.metric_bg.as_str()),
            ("--card-shadow", self.card_shadow.as_str()),
            ("--card-shadow-hover", self.card_shadow_hover.as_str()),
        ]
    }

    /// Value of one CSS variable by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_style(&StyleConfig::default())
    }
}

fn px(value: u32) -> String {
    format!("{}px", value)
}
