//! Captured parser log configuration.

use serde::{Deserialize, Serialize};

/// Default directive for logs captured into `parser_logs`.
pub const DEFAULT_FILTER: &str = "debug";

/// Configuration for per-invocation log capture.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive applied to captured records. Default: "debug".
    pub filter: Option<String>,
}

impl LoggingConfig {
    /// Returns the effective filter directive, defaulting to "debug".
    pub fn effective_filter(&self) -> &str {
        self.filter.as_deref().unwrap_or(DEFAULT_FILTER)
    }
}
