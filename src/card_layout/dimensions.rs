//! Title and subtitle of a card

use super::display_list::RenderElement;
use crate::format::to_js_string;
use crate::models::{FieldBindings, FieldId, Row};

pub const SUBTITLE_SEPARATOR: &str = " • ";

/// Build the dimensions section, or `None` when nothing resolved
pub fn build_dimensions(row: &Row, fields: &FieldBindings) -> Option<RenderElement> {
    let mut section = RenderElement::new("div").class("dimensions-section");

    if let Some(name) = fields.resolve_truthy(row, FieldId::CreativeName) {
        section.push_child(
            RenderElement::new("h3")
                .class("card-title")
                .text(to_js_string(name)),
        );
    }

    let parts: Vec<String> = [FieldId::CampaignGroup, FieldId::Channel]
        .into_iter()
        .filter_map(|field| fields.resolve_truthy(row, field))
        .map(to_js_string)
        .collect();

    if !parts.is_empty() {
        section.push_child(
            RenderElement::new("p")
                .class("card-subtitle")
                .text(parts.join(SUBTITLE_SEPARATOR)),
        );
    }

    if section.children.is_empty() {
        None
    } else {
        Some(section)
    }
}
