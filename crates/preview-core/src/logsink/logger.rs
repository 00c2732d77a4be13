use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

use super::LogSink;
use crate::errors::ConfigError;

/// A logger bound to one [`LogSink`].
///
/// Wraps a `tracing::Dispatch` whose JSON formatter writes into the sink.
/// Code running inside [`CaptureLogger::in_scope`] logs with the ordinary
/// `tracing` macros. Worker threads spawned by an engine must re-enter the
/// scope themselves (clone the logger, call `in_scope` on the worker).
#[derive(Clone)]
pub struct CaptureLogger {
    dispatch: Dispatch,
}

impl CaptureLogger {
    /// Build a logger writing into `sink`, filtered by an `EnvFilter`
    /// directive such as `"debug"` or `"info,engine=trace"`.
    pub fn new(sink: &LogSink, filter: &str) -> Result<Self, ConfigError> {
        let filter = EnvFilter::try_new(filter).map_err(|e| ConfigError::ValidationFailed {
            field: "logging.filter".to_string(),
            message: e.to_string(),
        })?;

        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(sink.clone())
            .with_ansi(false)
            .with_current_span(false)
            .with_span_list(false)
            .finish();

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
        })
    }

    /// Run `f` with this logger as the thread's default dispatcher.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// The underlying dispatcher, for callers that manage scopes themselves.
    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }
}

impl std::fmt::Debug for CaptureLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureLogger").finish_non_exhaustive()
    }
}
