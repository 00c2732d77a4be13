//! Tests for the bridge configuration system.

use std::sync::Mutex;

use preview_core::config::PreviewConfig;
use preview_core::errors::{ConfigError, PreviewErrorCode};

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_preview_env_vars() {
    for key in ["PREVIEW_LOGGING_FILTER", "PREVIEW_TREE_MAX_DEPTH"] {
        std::env::remove_var(key);
    }
}

/// Defaults apply when nothing is configured.
#[test]
fn test_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_preview_env_vars();

    let config = PreviewConfig::load(None).unwrap();
    assert_eq!(config.logging.effective_filter(), "debug");
    assert_eq!(config.tree.effective_max_depth(), 64);
}

/// TOML values override defaults; env overrides TOML.
#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_preview_env_vars();

    let toml = r#"
[logging]
filter = "info"

[tree]
max_depth = 8
"#;
    let config = PreviewConfig::load(Some(toml)).unwrap();
    assert_eq!(config.logging.effective_filter(), "info");
    assert_eq!(config.tree.effective_max_depth(), 8);

    std::env::set_var("PREVIEW_TREE_MAX_DEPTH", "16");
    std::env::set_var("PREVIEW_LOGGING_FILTER", "warn");
    let config = PreviewConfig::load(Some(toml)).unwrap();
    assert_eq!(config.tree.effective_max_depth(), 16);
    assert_eq!(config.logging.effective_filter(), "warn");
    clear_preview_env_vars();
}

/// Unparseable env values are ignored.
#[test]
fn test_bad_env_value_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_preview_env_vars();

    std::env::set_var("PREVIEW_TREE_MAX_DEPTH", "lots");
    let config = PreviewConfig::load(None).unwrap();
    assert_eq!(config.tree.max_depth, None);
    clear_preview_env_vars();
}

/// Invalid TOML is a parse error with the CONFIG_ERROR code.
#[test]
fn test_invalid_toml() {
    let err = PreviewConfig::from_toml("[logging\nfilter = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

/// Out-of-range and unparseable values fail validation.
#[test]
fn test_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_preview_env_vars();

    for toml in [
        "[tree]\nmax_depth = 0\n",
        "[tree]\nmax_depth = 5000\n",
        "[logging]\nfilter = \"engine=loud\"\n",
    ] {
        let err = PreviewConfig::load(Some(toml)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { .. }), "{toml}");
    }
}

/// Unknown keys are ignored (forward-compatible).
#[test]
fn test_unknown_keys_ignored() {
    let config = PreviewConfig::from_toml("[future]\nflag = true\n").unwrap();
    assert!(config.logging.filter.is_none());
}

/// Config round-trips to JSON for the host.
#[test]
fn test_serializes_to_json() {
    let config = PreviewConfig::from_toml("[tree]\nmax_depth = 3\n").unwrap();
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["tree"]["max_depth"], 3);
    assert!(value["logging"]["filter"].is_null());
}
