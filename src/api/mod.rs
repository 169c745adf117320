//! Creative Cards WASM API
//!
//! JavaScript-facing surface of the visualization: host bindings, DOM
//! mounting and the exported entry points.
//!
//! # Module Structure
//!
//! - `helpers`: serialization at the JS boundary with error context
//! - `host`: `dscc` subscription and interaction bindings
//! - `dom`: container lookup, theme application, display list mounting
//! - `render`: `subscribe`, `drawViz`, `layoutCards`
//! - `values`: `formatValue`, `themeVariables`

pub mod dom;
pub mod helpers;
pub mod host;
pub mod render;
pub mod values;

pub use dom::{apply_theme, ensure_container, DomMounter};
pub use host::DsccHost;
pub use render::{draw_viz, layout_cards, render_payload, subscribe};
pub use values::{format_value_js, theme_variables};
