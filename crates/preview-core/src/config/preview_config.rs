//! Top-level bridge configuration.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use super::tree_config::MAX_DEPTH_LIMIT;
use super::{LoggingConfig, TreeConfig};
use crate::errors::ConfigError;

/// Process-wide configuration shared by every invocation.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PREVIEW_*`)
/// 2. TOML string handed to the runtime at initialization
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PreviewConfig {
    pub logging: LoggingConfig,
    pub tree: TreeConfig,
}

impl PreviewConfig {
    /// Resolve configuration from an optional TOML string plus the
    /// environment, then validate the result.
    pub fn load(toml_str: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match toml_str {
            Some(s) => Self::from_toml(s)?,
            None => Self::default(),
        };
        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string without env overrides.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &PreviewConfig) -> Result<(), ConfigError> {
        if let Some(ref filter) = config.logging.filter {
            if let Err(e) = EnvFilter::try_new(filter) {
                return Err(ConfigError::ValidationFailed {
                    field: "logging.filter".to_string(),
                    message: e.to_string(),
                });
            }
        }
        if let Some(depth) = config.tree.max_depth {
            if depth == 0 || depth > MAX_DEPTH_LIMIT {
                return Err(ConfigError::ValidationFailed {
                    field: "tree.max_depth".to_string(),
                    message: format!("must be between 1 and {MAX_DEPTH_LIMIT}"),
                });
            }
        }
        Ok(())
    }

    /// Apply `PREVIEW_*` environment variables. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut PreviewConfig) {
        if let Ok(filter) = std::env::var("PREVIEW_LOGGING_FILTER") {
            if !filter.trim().is_empty() {
                config.logging.filter = Some(filter);
            }
        }
        if let Ok(val) = std::env::var("PREVIEW_TREE_MAX_DEPTH") {
            if let Ok(depth) = val.parse::<usize>() {
                config.tree.max_depth = Some(depth);
            }
        }
    }
}
