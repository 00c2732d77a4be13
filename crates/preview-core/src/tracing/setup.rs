//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Fallback directive when `PREVIEW_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "preview_core=info,preview_napi=info";

/// Filter for the host-side subscriber: `directive` when it parses,
/// [`DEFAULT_DIRECTIVE`] otherwise.
pub fn host_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Initialize the global tracing subscriber for bridge diagnostics.
///
/// Reads `PREVIEW_LOG` for per-module log levels, e.g.
/// `PREVIEW_LOG=preview_core::bridge=debug`. Output goes to stderr so it
/// never mixes with the payload handed back to the host.
///
/// Captured parser logs do not flow through this subscriber; each
/// invocation installs its own scoped dispatcher.
///
/// Idempotent. Calling it when another global subscriber is already set
/// is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = host_filter(std::env::var("PREVIEW_LOG").ok().as_deref());

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .with(filter)
            .try_init();
    });
}
