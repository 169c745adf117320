//! Shared helpers for WASM API operations
//!
//! Serialization and deserialization at the JavaScript boundary with
//! consistent error context and logging.

use crate::error::VizError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, VizError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let err = VizError::Payload(format!("{}: {}", error_context, e));
        log::error!("{}", err);
        err
    })
}

/// Serialize a value to a plain JavaScript object
///
/// Maps become ordinary objects (not `Map` instances) so the host can read
/// rows with property access.
pub fn serialize<T: Serialize + ?Sized>(
    value: &T,
    error_context: &str,
) -> Result<JsValue, VizError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| {
            let err = VizError::Serialization(format!("{}: {}", error_context, e));
            log::error!("{}", err);
            err
        })
}
