//! Virtual file tree configuration.

use serde::{Deserialize, Serialize};

/// Default maximum directory nesting accepted from the host.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Upper bound accepted by validation for `max_depth`.
pub const MAX_DEPTH_LIMIT: usize = 1024;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TreeConfig {
    /// Deepest directory nesting the builder descends into. Default: 64.
    pub max_depth: Option<usize>,
}

impl TreeConfig {
    /// Returns the effective maximum depth, defaulting to 64.
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }
}
