//! Field bindings
//!
//! The host maps each logical field role of the visualization (image URL,
//! creative name, impressions, ...) to the data column the report author
//! picked for it. Only the first bound column of a role is ever used.

use super::value::{is_truthy, Row};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Logical field roles understood by the card layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    ImageUrl,
    CreativeName,
    CreativeType,
    Status,
    CampaignGroup,
    Channel,
    Impressions,
    Clicks,
    Spend,
    Ctr,
}

impl FieldId {
    /// Key of this role in the host's `fields` object
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::ImageUrl => "imageUrl",
            FieldId::CreativeName => "creativeName",
            FieldId::CreativeType => "creativeType",
            FieldId::Status => "status",
            FieldId::CampaignGroup => "campaignGroup",
            FieldId::Channel => "channel",
            FieldId::Impressions => "impressions",
            FieldId::Clicks => "clicks",
            FieldId::Spend => "spend",
            FieldId::Ctr => "ctr",
        }
    }
}

/// A bound data column as described by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Column name used as the row key
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept: Option<String>,
}

impl FieldDescriptor {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Logical field id -> bound columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldBindings(HashMap<String, Vec<FieldDescriptor>>);

impl FieldBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `field` to `column`, replacing any previous binding
    pub fn bind(mut self, field: FieldId, column: impl Into<String>) -> Self {
        self.0
            .insert(field.as_str().to_string(), vec![FieldDescriptor::named(column)]);
        self
    }

    /// Column name bound to `field`, if any
    pub fn column_for(&self, field: FieldId) -> Option<&str> {
        self.0
            .get(field.as_str())
            .and_then(|columns| columns.first())
            .map(|descriptor| descriptor.name.as_str())
    }

    /// Raw row value for `field`
    ///
    /// Returns `None` when the field is unbound or the row has no such column.
    /// A JSON `null` comes back as `Some(Value::Null)`.
    pub fn resolve<'r>(&self, row: &'r Row, field: FieldId) -> Option<&'r Value> {
        let column = self.column_for(field)?;
        row.get(column)
    }

    /// Row value for `field`, only if it is truthy
    pub fn resolve_truthy<'r>(&self, row: &'r Row, field: FieldId) -> Option<&'r Value> {
        self.resolve(row, field).filter(|value| is_truthy(value))
    }

    /// Row value for `field`, only if it is present and not `null`
    pub fn resolve_present<'r>(&self, row: &'r Row, field: FieldId) -> Option<&'r Value> {
        self.resolve(row, field).filter(|value| !value.is_null())
    }
}
