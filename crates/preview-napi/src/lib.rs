//! # preview-napi
//!
//! NAPI-RS v3 bindings for the preview bridge.
//! Provides the JavaScript entry point `preview(fileTree, parameters?)`.
//!
//! Architecture:
//! - `runtime`: `PreviewRuntime` singleton via `OnceLock` (lock-free after init)
//! - `conversions`: error code mapping to `[ERROR_CODE] message` strings
//! - `bindings`: NAPI-exported functions (lifecycle, preview)

pub mod bindings;
pub mod conversions;
pub mod runtime;
