//! Configuration system for the preview bridge.
//! TOML-based, 3-layer resolution: env > TOML string > defaults.

pub mod logging_config;
pub mod preview_config;
pub mod tree_config;

pub use logging_config::LoggingConfig;
pub use preview_config::PreviewConfig;
pub use tree_config::TreeConfig;
