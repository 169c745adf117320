//! Single card layout
//!
//! A card is the image section (with badge overlay) followed by the content
//! section (dimensions, then metrics). Sections that end up empty are left
//! out instead of being emitted as empty wrappers.

use super::badges::build_badges;
use super::dimensions::build_dimensions;
use super::display_list::{NodeEvent, RenderElement};
use super::metrics::build_metrics;
use crate::format::to_js_string;
use crate::models::{FieldBindings, FieldId, Row, StyleConfig};

/// Alt text when the creative has no name
pub const DEFAULT_ALT_TEXT: &str = "Creative";

/// Builds one card per row for a fixed style and field mapping
pub struct CardBuilder<'a> {
    style: &'a StyleConfig,
    fields: &'a FieldBindings,
    fallback_image_url: &'a str,
}

impl<'a> CardBuilder<'a> {
    pub fn new(
        style: &'a StyleConfig,
        fields: &'a FieldBindings,
        fallback_image_url: &'a str,
    ) -> Self {
        Self {
            style,
            fields,
            fallback_image_url,
        }
    }

    /// Build the card for `row`, reporting `index` when clicked
    pub fn build(&self, row: &Row, index: usize) -> RenderElement {
        let mut card = RenderElement::new("div")
            .class("creative-card")
            .on(NodeEvent::Click { index });

        if let Some(image) = self.image_section(row) {
            card.push_child(image);
        }

        let mut content = RenderElement::new("div").class("card-content");

        if self.style.show_dimensions {
            if let Some(dimensions) = build_dimensions(row, self.fields) {
                content.push_child(dimensions);
            }
        }

        if self.style.show_metrics {
            if let Some(metrics) = build_metrics(row, self.fields, self.style) {
                content.push_child(metrics);
            }
        }

        if !content.children.is_empty() {
            card.push_child(content);
        }

        card
    }

    fn image_section(&self, row: &Row) -> Option<RenderElement> {
        let url = self.fields.resolve_truthy(row, FieldId::ImageUrl)?;

        let alt = self
            .fields
            .resolve_truthy(row, FieldId::CreativeName)
            .map(to_js_string)
            .unwrap_or_else(|| DEFAULT_ALT_TEXT.to_string());

        let image = RenderElement::new("img")
            .attr("src", to_js_string(url))
            .attr("alt", alt)
            .on(NodeEvent::ImageFallback {
                src: self.fallback_image_url.to_string(),
            });

        let mut section = RenderElement::new("div").class("card-image").child(image);
        if let Some(badges) = build_badges(row, self.fields) {
            section.push_child(badges);
        }

        Some(section)
    }
}
