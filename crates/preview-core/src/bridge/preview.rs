//! PreviewBridge: the single entry point the host calls.

use std::cell::Cell;

use serde_json::Value;

use super::guard::protect;
use super::invoker::invoke;
use super::phase::Phase;
use crate::config::PreviewConfig;
use crate::engine::AnalysisEngine;
use crate::errors::{BridgeError, TreeError};
use crate::logsink::{CaptureLogger, LogSink};
use crate::types::{Diagnostic, ResponseEnvelope};
use crate::vfs::{BuiltTree, TreeBuilder};

/// Summary of the diagnostic synthesized for a panic.
pub const PANIC_SUMMARY: &str = "A panic occurred";

/// Binds an engine to the process-wide configuration.
///
/// Holds no per-invocation state: every call to [`PreviewBridge::run`]
/// creates its own sink, logger and tree.
pub struct PreviewBridge<E> {
    engine: E,
    config: PreviewConfig,
}

impl<E: AnalysisEngine> PreviewBridge<E> {
    pub fn new(engine: E, config: PreviewConfig) -> Self {
        Self { engine, config }
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Run one invocation and serialize the envelope.
    pub fn preview(&self, file_tree: &Value, parameters: Option<&Value>) -> Result<String, BridgeError> {
        self.run(file_tree, parameters)?.to_payload()
    }

    /// Run one invocation.
    ///
    /// Returns `Err` only when the arguments are unusable (top-level tree is
    /// not an object, parameters are not an object) or the logger cannot be
    /// built. A panic in tree construction or in the engine yields an
    /// envelope with `output: null` and one error diagnostic.
    pub fn run(&self, file_tree: &Value, parameters: Option<&Value>) -> Result<ResponseEnvelope, BridgeError> {
        let builder = TreeBuilder::new(self.config.tree.effective_max_depth());
        self.execute(|value| builder.build(value), file_tree, parameters)
    }

    /// [`run`](Self::run) with the tree construction step supplied by the caller.
    fn execute(
        &self,
        build: impl FnOnce(&Value) -> Result<BuiltTree, TreeError>,
        file_tree: &Value,
        parameters: Option<&Value>,
    ) -> Result<ResponseEnvelope, BridgeError> {
        let sink = LogSink::new();
        let logger = CaptureLogger::new(&sink, self.config.logging.effective_filter())?;

        let phase = Cell::new(Phase::Idle);
        let advance = |next: Phase| {
            debug_assert!(phase.get().can_advance_to(next), "{} -> {next}", phase.get());
            phase.set(next);
        };

        let outcome = protect(|| {
            logger.in_scope(|| {
                advance(Phase::BuildingTree);
                let built = match build(file_tree) {
                    Ok(built) => built,
                    Err(e) => {
                        advance(Phase::TreeFailed);
                        return Err(BridgeError::from(e));
                    }
                };
                advance(Phase::TreeReady);
                advance(Phase::Invoking);
                invoke(&self.engine, &built.tree, parameters, &logger)
            })
        });
        let parser_logs = sink.drain();

        match outcome {
            Ok(Ok(invocation)) => {
                advance(Phase::Completed);
                tracing::debug!(
                    diags = invocation.diags.len(),
                    logs = parser_logs.len(),
                    "preview completed"
                );
                Ok(ResponseEnvelope::completed(
                    invocation.output,
                    invocation.diags,
                    parser_logs,
                ))
            }
            Ok(Err(e)) => {
                tracing::warn!(phase = %phase.get(), error = %e, "preview rejected its arguments");
                Err(e)
            }
            Err(fault) => {
                let during = phase.get();
                advance(Phase::Faulted);
                tracing::error!(phase = %during, panic = fault.message(), "preview panicked");
                let diag = Diagnostic::error(PANIC_SUMMARY, fault.message())
                    .with_extra("phase", during.name());
                Ok(ResponseEnvelope::faulted(diag, parser_logs))
            }
        }
    }
}
