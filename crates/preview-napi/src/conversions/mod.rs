//! Rust ↔ JS conversions.

pub mod error_codes;
pub mod host_value;
