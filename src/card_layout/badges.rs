//! Badge overlay shown on top of the creative image

use super::display_list::RenderElement;
use crate::format::to_js_string;
use crate::models::{FieldBindings, FieldId, Row};

/// Build the badge container, or `None` when the row has no type or status
pub fn build_badges(row: &Row, fields: &FieldBindings) -> Option<RenderElement> {
    let mut container = RenderElement::new("div").class("card-badges");

    if let Some(creative_type) = fields.resolve_truthy(row, FieldId::CreativeType) {
        container.push_child(
            RenderElement::new("span")
                .class("badge")
                .class("badge-type")
                .text(to_js_string(creative_type)),
        );
    }

    if let Some(status) = fields.resolve_truthy(row, FieldId::Status) {
        let status = to_js_string(status);
        container.push_child(
            RenderElement::new("span")
                .class("badge")
                .class("badge-status")
                .class(status_class(&status))
                .text(status),
        );
    }

    if container.children.is_empty() {
        None
    } else {
        Some(container)
    }
}

/// Status modifier class: `Active` -> `badge-active`
pub fn status_class(status: &str) -> String {
    format!("badge-{}", status.to_lowercase())
}
