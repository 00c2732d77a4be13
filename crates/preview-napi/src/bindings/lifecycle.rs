//! Lifecycle bindings: initialize, configuration.

use napi_derive::napi;

use crate::conversions::error_codes;
use crate::runtime::{self, RuntimeOptions};

/// Initialize the preview runtime.
///
/// Optional: `preview()` falls back to defaults plus `PREVIEW_*` env
/// overrides when this was never called.
/// `config_toml`: optional TOML configuration string.
#[napi]
pub fn preview_initialize(config_toml: Option<String>) -> napi::Result<()> {
    runtime::initialize(RuntimeOptions { config_toml })
}

/// Returns the active configuration as JSON.
#[napi]
pub fn preview_configuration() -> napi::Result<serde_json::Value> {
    let rt = runtime::get()?;
    serde_json::to_value(rt.config())
        .map_err(|e| error_codes::internal_error(format!("Failed to serialize config: {e}")))
}
