use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::types::LogRecord;

/// Append-only, thread-safe buffer of captured log records.
///
/// Cloning yields another handle to the same buffer. One sink is created per
/// invocation; there is no process-wide instance.
#[derive(Debug, Clone, Default)]
pub struct LogSink {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one raw log line. Lines that are not structured JSON are kept
    /// verbatim as an `unknown`-level record. Never fails.
    pub fn write_line(&self, raw: &str) {
        let record = LogRecord::from_line(raw);
        self.lock().push(record);
    }

    /// Take every record captured so far, in arrival order.
    pub fn drain(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A writer that panicked mid-push leaves the Vec intact, so poisoning is
    // not treated as fatal.
    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
