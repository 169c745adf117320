//! Fixed mount configuration
//!
//! The host platform gives the visualization an iframe and nothing else, so
//! the mount point and the image fallback are constants with a small options
//! struct around them for callers (and tests) that need another container.

/// Id of the single top-level container all output is rendered into
pub const CONTAINER_ID: &str = "viz-container";

/// Image shown when a creative's own image fails to load
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1549317661-bd32c8ce0db2?w=400&h=300&fit=crop";

/// Options shared by the layout and mount phases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Id of the container element (created under `<body>` if absent)
    pub container_id: String,

    /// Replacement `src` for images that fail to load
    pub fallback_image_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            container_id: CONTAINER_ID.to_string(),
            fallback_image_url: FALLBACK_IMAGE_URL.to_string(),
        }
    }
}
