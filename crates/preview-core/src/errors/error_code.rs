//! PreviewErrorCode trait for NAPI conversion.

/// Trait for converting bridge errors to NAPI error codes.
/// Every error enum implements this so the host can branch on a
/// stable code instead of parsing prose.
pub trait PreviewErrorCode {
    /// Returns the NAPI error code string (e.g., "TREE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted NAPI error string: `[ERROR_CODE] message`.
    fn napi_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for NAPI boundary.
pub const TREE_ERROR: &str = "TREE_ERROR";
pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
