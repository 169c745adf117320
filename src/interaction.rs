//! Interaction reports sent back to the host
//!
//! A click on a card reports the card's full row and its position. The host
//! uses this for cross-filtering; the visualization itself keeps no state.

use crate::error::VizError;
use crate::models::Row;
use serde::Serialize;

/// Event kind reported for card clicks
pub const CLICK_EVENT: &str = "onClick";

/// Payload of a card click
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionPayload<'a> {
    pub data: &'a Row,
    pub index: usize,
}

/// Receiver of interaction reports (the host platform, or a test double)
pub trait InteractionSink {
    fn send_interaction(
        &self,
        event_kind: &str,
        payload: &InteractionPayload<'_>,
    ) -> Result<(), VizError>;
}

/// Report a click on the card at `index`
///
/// An index outside `rows` is logged and ignored.
pub fn report_click(
    sink: &dyn InteractionSink,
    rows: &[Row],
    index: usize,
) -> Result<(), VizError> {
    let Some(row) = rows.get(index) else {
        log::warn!("Click on card {} ignored, only {} rows rendered", index, rows.len());
        return Ok(());
    };

    log::debug!("Card {} clicked", index);
    sink.send_interaction(CLICK_EVENT, &InteractionPayload { data: row, index })
}
