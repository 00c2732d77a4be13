//! Tests for the host-side tracing setup.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use preview_core::tracing::setup::DEFAULT_DIRECTIVE;
use preview_core::tracing::{host_filter, init_tracing};

/// init_tracing() is idempotent.
#[test]
fn test_init_tracing_idempotent() {
    init_tracing();
    init_tracing();
}

/// No PREVIEW_LOG selects the default directive.
#[test]
fn test_unset_preview_log_uses_default() {
    let filter = host_filter(None);
    assert_eq!(filter.to_string(), EnvFilter::new(DEFAULT_DIRECTIVE).to_string());
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
}

/// A garbage PREVIEW_LOG falls back to the default directive.
#[test]
fn test_invalid_preview_log_fallback() {
    let filter = host_filter(Some("this_is=not_a_level"));
    assert_eq!(filter.to_string(), EnvFilter::new(DEFAULT_DIRECTIVE).to_string());
}

/// A valid PREVIEW_LOG is used as given.
#[test]
fn test_valid_preview_log_is_used() {
    let filter = host_filter(Some("preview_core::bridge=trace"));
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
}
