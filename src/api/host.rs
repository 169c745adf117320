//! Bindings to the host platform's community visualization API (`dscc`)
//!
//! Only two entry points are consumed: the data subscription and the
//! interaction channel. Both are looked up lazily so a missing host surfaces
//! as a [`VizError::Host`] instead of a load-time failure.

use super::helpers::serialize;
use crate::error::VizError;
use crate::interaction::{InteractionPayload, InteractionSink};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = dscc, js_name = sendInteraction)]
    fn dscc_send_interaction(action_id: &str, payload: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = dscc, js_name = subscribeToData)]
    fn dscc_subscribe_to_data(
        callback: &js_sys::Function,
        options: &JsValue,
    ) -> Result<JsValue, JsValue>;
}

/// The real host: forwards interactions to `dscc.sendInteraction`
#[derive(Debug, Clone, Copy, Default)]
pub struct DsccHost;

impl InteractionSink for DsccHost {
    fn send_interaction(
        &self,
        event_kind: &str,
        payload: &InteractionPayload<'_>,
    ) -> Result<(), VizError> {
        let payload_js = serialize(payload, "Interaction payload")?;
        dscc_send_interaction(event_kind, &payload_js)
            .map_err(|e| VizError::host("dscc.sendInteraction", e))
    }
}

/// Look up `dscc.<member>` on the global object
fn dscc_member(member: &str) -> Result<JsValue, VizError> {
    let dscc = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("dscc"))
        .map_err(|e| VizError::host("dscc", e))?;
    if dscc.is_undefined() || dscc.is_null() {
        return Err(VizError::Host("global dscc object is not defined".to_string()));
    }

    let value = js_sys::Reflect::get(&dscc, &JsValue::from_str(member))
        .map_err(|e| VizError::host(member, e))?;
    if value.is_undefined() {
        return Err(VizError::Host(format!("dscc.{} is not defined", member)));
    }
    Ok(value)
}

/// Register `handler` for object-transformed data pushes
///
/// The handler lives for the rest of the page; the host never unsubscribes a
/// visualization.
pub fn subscribe_to_data<F>(handler: F) -> Result<(), VizError>
where
    F: FnMut(JsValue) + 'static,
{
    let transform = dscc_member("objectTransform")?;

    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &JsValue::from_str("transform"), &transform)
        .map_err(|e| VizError::host("subscription options", e))?;

    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(JsValue)>);
    dscc_subscribe_to_data(callback.as_ref().unchecked_ref(), &options)
        .map_err(|e| VizError::host("dscc.subscribeToData", e))?;
    callback.forget();

    Ok(())
}
