//! Error types for the visualization boundary
//!
//! Rendering itself never fails: missing fields, broken images and odd values
//! all degrade to omitted fragments or placeholder text. These errors only
//! cover the edges of the module where the browser or the host platform is
//! involved.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures at the JavaScript / DOM / host boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VizError {
    /// The host payload (or a piece of it) could not be decoded
    #[error("Payload deserialization error: {0}")]
    Payload(String),

    /// A value could not be handed back to JavaScript
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A browser API call failed or a required node is missing
    #[error("DOM error: {0}")]
    Dom(String),

    /// The `dscc` host API (or one of its members) is unavailable
    #[error("Host API unavailable: {0}")]
    Host(String),
}

impl VizError {
    /// Wrap a thrown JavaScript value from a DOM call
    pub fn dom(context: &str, err: JsValue) -> Self {
        VizError::Dom(format!("{}: {:?}", context, err))
    }

    /// Wrap a thrown JavaScript value from a host call
    pub fn host(context: &str, err: JsValue) -> Self {
        VizError::Host(format!("{}: {:?}", context, err))
    }
}

impl From<VizError> for JsValue {
    fn from(err: VizError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
