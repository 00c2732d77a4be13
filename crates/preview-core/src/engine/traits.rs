use serde::Serialize;

use crate::logsink::CaptureLogger;
use crate::types::{Diagnostics, ParameterMap};
use crate::vfs::VirtualFileTree;

/// Everything an engine receives for one invocation.
pub struct AnalysisRequest<'a> {
    pub files: &'a VirtualFileTree,
    /// `None` means no parameter overrides were supplied.
    pub parameters: Option<&'a ParameterMap>,
    /// Already installed for the calling thread; workers re-enter it.
    pub logger: &'a CaptureLogger,
}

/// What an engine hands back: an optional result and its diagnostics.
#[derive(Debug)]
pub struct Analysis<O> {
    pub output: Option<O>,
    pub diags: Diagnostics,
}

impl<O> Analysis<O> {
    pub fn new(output: Option<O>, diags: Diagnostics) -> Self {
        Self { output, diags }
    }
}

/// An external analysis engine.
///
/// Implementations may panic; the bridge contains the fault. They should
/// report problems with the input as diagnostics rather than errors.
pub trait AnalysisEngine: Send + Sync {
    type Output: Serialize;

    fn analyze(&self, request: AnalysisRequest<'_>) -> Analysis<Self::Output>;
}
