//! PreviewRuntime: singleton via `OnceLock`, lock-free after initialization.
//!
//! The runtime owns the resolved configuration and the bridge bound to the
//! bundled engine. It holds no per-invocation state, so concurrent
//! `preview()` calls from worker threads share it without locking.

use std::sync::{Arc, OnceLock};

use preview_core::config::PreviewConfig;
use preview_core::engine::InventoryEngine;
use preview_core::PreviewBridge;

use crate::conversions::error_codes;

/// Global singleton: lock-free after first initialization.
static RUNTIME: OnceLock<Arc<PreviewRuntime>> = OnceLock::new();

pub struct PreviewRuntime {
    pub bridge: PreviewBridge<InventoryEngine>,
}

/// Options for initializing the runtime.
#[derive(Default)]
pub struct RuntimeOptions {
    /// TOML configuration string. If None, uses defaults plus env overrides.
    pub config_toml: Option<String>,
}

impl PreviewRuntime {
    fn new(opts: RuntimeOptions) -> napi::Result<Self> {
        let config =
            PreviewConfig::load(opts.config_toml.as_deref()).map_err(error_codes::to_napi_error)?;
        Ok(Self {
            bridge: PreviewBridge::new(InventoryEngine::new(), config),
        })
    }

    pub fn config(&self) -> &PreviewConfig {
        self.bridge.config()
    }
}

/// Initialize the global PreviewRuntime singleton.
///
/// Returns an error if already initialized (explicitly or by a prior
/// `preview()` call) or if the configuration is invalid.
pub fn initialize(opts: RuntimeOptions) -> napi::Result<()> {
    preview_core::tracing::init_tracing();
    if RUNTIME.get().is_some() {
        return Err(error_codes::already_initialized());
    }
    let runtime = PreviewRuntime::new(opts)?;
    RUNTIME
        .set(Arc::new(runtime))
        .map_err(|_| error_codes::already_initialized())?;
    tracing::info!("PreviewRuntime initialized");
    Ok(())
}

/// Get the global PreviewRuntime, initializing it with defaults when the
/// host never called `previewInitialize`.
pub fn get() -> napi::Result<Arc<PreviewRuntime>> {
    if let Some(rt) = RUNTIME.get() {
        return Ok(Arc::clone(rt));
    }
    preview_core::tracing::init_tracing();
    let runtime = Arc::new(PreviewRuntime::new(RuntimeOptions::default())?);
    // Another thread may have won the race; use whichever got stored.
    let _ = RUNTIME.set(runtime);
    RUNTIME
        .get()
        .cloned()
        .ok_or_else(|| error_codes::internal_error("PreviewRuntime failed to initialize"))
}

/// Check if the runtime has been initialized.
pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}
