//! Host data payload (object-transform shape)

use super::fields::FieldBindings;
use super::style::RawStyle;
use super::value::Row;
use serde::{Deserialize, Serialize};

/// Tables delivered by the host; only the default table is rendered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tables {
    #[serde(rename = "DEFAULT", default)]
    pub default: Option<Vec<Row>>,
}

/// One push from the host's data subscription
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizPayload {
    pub tables: Tables,
    pub style: RawStyle,
    pub fields: FieldBindings,
}

impl VizPayload {
    /// Rows of the default table, `None` when the host sent none
    pub fn rows(&self) -> Option<&[Row]> {
        self.tables.default.as_deref()
    }
}
