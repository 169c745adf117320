//! Card Layout Engine
//!
//! Turns a host payload into a [`DisplayList`]: a tree of typed UI nodes with
//! classes, attributes, text and event bindings. Nothing here touches the
//! browser, so the whole layout is testable natively.

pub mod badges;
pub mod card;
pub mod dimensions;
pub mod display_list;
pub mod grid;
pub mod metrics;

pub use badges::build_badges;
pub use card::CardBuilder;
pub use dimensions::build_dimensions;
pub use display_list::{DisplayList, NodeEvent, RenderElement, RenderNode};
pub use grid::{empty_state, CardLayoutEngine};
pub use metrics::build_metrics;
