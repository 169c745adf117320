//! Grid-level layout: one card per row, or the empty state

use super::card::CardBuilder;
use super::display_list::{DisplayList, RenderElement};
use crate::config::RenderOptions;
use crate::models::{FieldBindings, Row, StyleConfig, VizPayload};
use crate::theme::Theme;

pub const EMPTY_ICON: &str = "📊";
pub const EMPTY_HEADING: &str = "No Data Available";
pub const EMPTY_MESSAGE: &str = "Please add data fields to the visualization configuration";

/// Main layout engine for the card grid
pub struct CardLayoutEngine {
    options: RenderOptions,
}

impl CardLayoutEngine {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Lay out a full host payload
    pub fn layout_payload(&self, payload: &VizPayload) -> DisplayList {
        let style = StyleConfig::from_raw(&payload.style);
        self.layout(payload.rows(), &style, &payload.fields)
    }

    /// Lay out rows as a card grid
    ///
    /// Empty or absent rows produce the empty-state placeholder and no theme.
    /// Otherwise card `i` is built from `rows[i]` and reports index `i`.
    pub fn layout(
        &self,
        rows: Option<&[Row]>,
        style: &StyleConfig,
        fields: &FieldBindings,
    ) -> DisplayList {
        let rows = match rows {
            Some(rows) if !rows.is_empty() => rows,
            _ => {
                log::debug!("No rows to render, showing empty state");
                return DisplayList {
                    theme: None,
                    root: empty_state().into(),
                };
            }
        };

        log::debug!("Laying out {} cards in {} columns", rows.len(), style.columns);

        let builder = CardBuilder::new(style, fields, &self.options.fallback_image_url);
        let mut grid = RenderElement::new("div").class("creative-cards-grid");
        for (index, row) in rows.iter().enumerate() {
            grid.push_child(builder.build(row, index));
        }

        DisplayList {
            theme: Some(Theme::from_style(style)),
            root: grid.into(),
        }
    }
}

impl Default for CardLayoutEngine {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

/// Placeholder shown when the host sent no rows
pub fn empty_state() -> RenderElement {
    RenderElement::new("div")
        .class("empty-state")
        .child(RenderElement::new("div").class("empty-icon").text(EMPTY_ICON))
        .child(RenderElement::new("h3").text(EMPTY_HEADING))
        .child(RenderElement::new("p").text(EMPTY_MESSAGE))
}
