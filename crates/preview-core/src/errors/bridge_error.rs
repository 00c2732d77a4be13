//! Errors that cross the host boundary through the call's error channel.

use super::error_code::{self, PreviewErrorCode};
use super::{ConfigError, TreeError};

/// Errors returned by a bridge invocation instead of an envelope.
///
/// Anything not listed here is reported inside the envelope's `diags`.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("File tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("Invalid argument `{name}`: {message}")]
    InvalidArgument { name: &'static str, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PreviewErrorCode for BridgeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Tree(e) => e.error_code(),
            Self::InvalidArgument { .. } => error_code::INVALID_ARGUMENT,
            Self::Config(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}
