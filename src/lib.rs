//! Creative Cards WASM Module
//!
//! Renders advertising creatives as a grid of cards inside a reporting
//! platform's community visualization frame. Each data push from the host is
//! laid out into a display list (pure Rust) and then mounted into the DOM.

pub mod api;
pub mod card_layout;
pub mod config;
pub mod error;
pub mod format;
pub mod interaction;
pub mod models;
pub mod theme;

// Re-export commonly used types
pub use card_layout::{CardLayoutEngine, DisplayList, NodeEvent, RenderElement, RenderNode};
pub use config::RenderOptions;
pub use error::VizError;
pub use format::format_value;
pub use interaction::{report_click, InteractionPayload, InteractionSink, CLICK_EVENT};
pub use models::*;
pub use theme::Theme;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(err) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("Logger already initialized: {}", err).into());
        }
    }

    log::info!("Creative Cards WASM module initialized");
}
