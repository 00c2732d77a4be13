//! All NAPI-exported functions, grouped by domain.

pub mod lifecycle;
pub mod preview;
