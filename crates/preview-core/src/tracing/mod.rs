//! Host-side observability for the bridge itself.
//! `tracing` crate with `EnvFilter`, separate from the captured parser logs.

pub mod fields;
pub mod setup;

pub use setup::{host_filter, init_tracing};
