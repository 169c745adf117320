//! Metric descriptors
//!
//! The four metric tiles are fixed; report authors only choose which columns
//! feed them.

use super::fields::FieldId;
use serde::{Deserialize, Serialize};

/// How a raw value is turned into display text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormatKind {
    /// Locale-grouped number
    Number,
    /// `$` + locale-grouped whole number
    Currency,
    /// Two decimals + `%`
    Percentage,
    /// Plain textual representation
    Text,
}

impl FormatKind {
    /// Parse a format name; unknown names format as plain text
    pub fn from_name(name: &str) -> Self {
        match name {
            "number" => FormatKind::Number,
            "currency" => FormatKind::Currency,
            "percentage" => FormatKind::Percentage,
            _ => FormatKind::Text,
        }
    }
}

/// One metric tile definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDescriptor {
    pub field: FieldId,
    pub label: &'static str,
    pub icon: &'static str,
    pub format: FormatKind,
}

/// Metric tiles in display order
pub const METRICS: [MetricDescriptor; 4] = [
    MetricDescriptor {
        field: FieldId::Impressions,
        label: "Impressions",
        icon: "👁️",
        format: FormatKind::Number,
    },
    MetricDescriptor {
        field: FieldId::Clicks,
        label: "Clicks",
        icon: "🖱️",
        format: FormatKind::Number,
    },
    MetricDescriptor {
        field: FieldId::Spend,
        label: "Spend",
        icon: "💰",
        format: FormatKind::Currency,
    },
    MetricDescriptor {
        field: FieldId::Ctr,
        label: "CTR",
        icon: "📈",
        format: FormatKind::Percentage,
    },
];
