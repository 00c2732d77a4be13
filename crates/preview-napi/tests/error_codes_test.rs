//! Tests for the `[ERROR_CODE] message` conversion at the NAPI boundary.

use preview_core::errors::{BridgeError, ConfigError, TreeError};
use preview_napi::conversions::error_codes;

/// A structural tree error surfaces with its code prefix.
#[test]
fn tree_error_reason() {
    let err = error_codes::to_napi_error(BridgeError::from(TreeError::NotAMapping {
        found: "array",
    }));
    assert!(err.reason.starts_with("[TREE_ERROR] "), "{}", err.reason);
    assert!(err.reason.contains("array"));
}

/// Non-object parameters map to INVALID_ARGUMENT.
#[test]
fn invalid_argument_reason() {
    let err = error_codes::to_napi_error(BridgeError::InvalidArgument {
        name: "parameters",
        message: "expected an object, got number".to_string(),
    });
    assert!(err.reason.starts_with("[INVALID_ARGUMENT] "), "{}", err.reason);
    assert!(err.reason.contains("parameters"));
}

/// Config validation failures keep the field name in the message.
#[test]
fn config_error_reason() {
    let err = error_codes::to_napi_error(ConfigError::ValidationFailed {
        field: "tree.max_depth".to_string(),
        message: "must be between 1 and 1024".to_string(),
    });
    assert!(err.reason.starts_with("[CONFIG_ERROR] "), "{}", err.reason);
    assert!(err.reason.contains("tree.max_depth"));
}

/// Lifecycle helpers format the same way.
#[test]
fn lifecycle_reasons() {
    assert!(error_codes::already_initialized()
        .reason
        .starts_with("[ALREADY_INITIALIZED] "));
    assert_eq!(
        error_codes::internal_error("boom").reason,
        "[INTERNAL_ERROR] boom"
    );
}
