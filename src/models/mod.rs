//! Data model for the Creative Cards visualization
//!
//! Everything the host pushes on each data update: rows, field bindings and
//! the style configuration, plus the fixed metric descriptor table.

pub mod fields;
pub mod metrics;
pub mod payload;
pub mod style;
pub mod value;

pub use fields::{FieldBindings, FieldDescriptor, FieldId};
pub use metrics::{FormatKind, MetricDescriptor, METRICS};
pub use payload::{Tables, VizPayload};
pub use style::{MetricsLayout, RawStyle, StyleConfig};
pub use value::{is_truthy, Row};
