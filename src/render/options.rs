//! Rendering options shared by all rules.

use serde::{Deserialize, Serialize};

/// Options threaded through every rule of a render pass.
///
/// Constructed once per render and passed explicitly; rules never read
/// ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Force any table containing another table onto the preserved-HTML
    /// path. When off, such tables are flattened instead (each cell rendered
    /// as an independent block) unless another HTML trigger applies.
    pub preserve_nested_tables: bool,

    /// Fence delimiter used when extracting highlighted code blocks.
    pub fence: String,
}

impl RenderOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set nested-table preservation.
    pub fn with_preserve_nested_tables(mut self, preserve: bool) -> Self {
        self.preserve_nested_tables = preserve;
        self
    }

    /// Set the code fence delimiter.
    pub fn with_fence(mut self, fence: impl Into<String>) -> Self {
        self.fence = fence.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            preserve_nested_tables: false,
            fence: "```".to_string(),
        }
    }
}
