//! Bridge error → napi::Error conversion with structured `[ERROR_CODE] message` strings.
//!
//! The JS client parses the code from the message format:
//! `[ERROR_CODE] Human-readable message`.

use napi::Status;
use preview_core::errors::PreviewErrorCode;

// ---- Error code constants ----

// Lifecycle
pub const ALREADY_INITIALIZED: &str = "ALREADY_INITIALIZED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

// Arguments
pub const TREE_ERROR: &str = "TREE_ERROR";
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";

// General
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// Convert any bridge error implementing `PreviewErrorCode + Display` to a
/// structured NAPI error.
///
/// Output format: `[ERROR_CODE] Human-readable message`
pub fn to_napi_error(err: impl std::fmt::Display + PreviewErrorCode) -> napi::Error {
    let code = err.error_code();
    napi::Error::new(Status::GenericFailure, format!("[{code}] {err}"))
}

/// Create an "already initialized" error.
pub fn already_initialized() -> napi::Error {
    napi::Error::new(
        Status::GenericFailure,
        format!("[{ALREADY_INITIALIZED}] PreviewRuntime already initialized"),
    )
}

/// Create an internal error with a custom message.
pub fn internal_error(msg: impl std::fmt::Display) -> napi::Error {
    napi::Error::new(Status::GenericFailure, format!("[{INTERNAL_ERROR}] {msg}"))
}
