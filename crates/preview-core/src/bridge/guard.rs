//! Panic containment for the outermost entry point.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// A panic caught by [`protect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    message: String,
}

impl Fault {
    /// Textual description of the panic payload.
    pub fn message(&self) -> &str {
        &self.message
    }

    fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "panic with a non-string payload".to_string()
        };
        if message.is_empty() {
            return Self {
                message: "panic with an empty message".to_string(),
            };
        }
        Self { message }
    }
}

/// Run `f`, converting an unwinding panic into a [`Fault`].
///
/// Only the bridge entry point uses this. It requires `panic = "unwind"`;
/// an aborting profile terminates the host instead.
pub fn protect<T>(f: impl FnOnce() -> T) -> Result<T, Fault> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(Fault::from_payload)
}
