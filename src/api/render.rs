//! Rendering entry points
//!
//! `subscribe` wires the host's data pushes to the render pipeline; `drawViz`
//! and `layoutCards` expose single passes for hosts and tests that drive the
//! module directly.

use super::dom::{document, ensure_container, DomMounter};
use super::helpers::{deserialize, serialize};
use super::host::{subscribe_to_data, DsccHost};
use crate::card_layout::CardLayoutEngine;
use crate::config::RenderOptions;
use crate::error::VizError;
use crate::interaction::InteractionSink;
use crate::models::{Row, VizPayload};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Run the full pipeline for one payload: layout, clear, theme, mount
pub fn render_payload(
    payload: &VizPayload,
    sink: Rc<dyn InteractionSink>,
    options: &RenderOptions,
) -> Result<(), VizError> {
    let document = document()?;
    let container = ensure_container(&document, &options.container_id)?;

    let engine = CardLayoutEngine::new(options.clone());
    let display_list = engine.layout_payload(payload);

    let rows: Rc<[Row]> = Rc::from(payload.rows().unwrap_or_default().to_vec());
    let card_count = rows.len();
    DomMounter::new(document, rows, sink).mount(&container, &display_list)?;

    log::info!("Rendered {} creative cards into #{}", card_count, options.container_id);
    Ok(())
}

fn draw_payload_js(payload_js: JsValue) -> Result<(), VizError> {
    let payload: VizPayload = deserialize(payload_js, "Payload")?;
    render_payload(&payload, Rc::new(DsccHost), &RenderOptions::default())
}

/// Render one host payload into `#viz-container`
#[wasm_bindgen(js_name = drawViz)]
pub fn draw_viz(payload_js: JsValue) -> Result<(), JsValue> {
    draw_payload_js(payload_js).map_err(|err| {
        log::error!("drawViz failed: {}", err);
        JsValue::from(err)
    })
}

/// Register the renderer with the host's data subscription
#[wasm_bindgen]
pub fn subscribe() -> Result<(), JsValue> {
    subscribe_to_data(|payload_js| {
        // the host callback has no error channel
        if let Err(err) = draw_payload_js(payload_js) {
            log::error!("Render failed: {}", err);
        }
    })?;

    log::info!("Subscribed to host data updates");
    Ok(())
}

/// Compute the display list for a payload without touching the DOM
#[wasm_bindgen(js_name = layoutCards)]
pub fn layout_cards(payload_js: JsValue) -> Result<JsValue, JsValue> {
    let payload: VizPayload = deserialize(payload_js, "Payload")?;
    let display_list = CardLayoutEngine::default().layout_payload(&payload);
    Ok(serialize(&display_list, "DisplayList")?)
}
