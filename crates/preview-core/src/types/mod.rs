//! Wire types shared with the host.
//!
//! Everything here derives `ts_rs::TS` so the JavaScript side can mirror the
//! shapes; bindings are written to `bindings/` when the test suite runs.

pub mod diagnostic;
pub mod envelope;
pub mod log_record;
pub mod parameters;

pub use diagnostic::{Diagnostic, Diagnostics, Severity};
pub use envelope::ResponseEnvelope;
pub use log_record::{LogRecord, UNKNOWN_LEVEL};
pub use parameters::{host_value_to_string, ParameterMap};
