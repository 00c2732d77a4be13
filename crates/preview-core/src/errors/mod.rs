//! Error handling for the preview bridge.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod bridge_error;
pub mod config_error;
pub mod error_code;
pub mod tree_error;

pub use bridge_error::BridgeError;
pub use config_error::ConfigError;
pub use error_code::PreviewErrorCode;
pub use tree_error::TreeError;
