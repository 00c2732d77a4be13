//! Virtual file tree errors.

use super::error_code::{self, PreviewErrorCode};

/// Errors raised while building or reading a `VirtualFileTree`.
///
/// Only `NotAMapping` at the top level is fatal to an invocation; every
/// other variant is recovered per node by the builder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("file tree must be an object of files and directories, got {found}")]
    NotAMapping { found: &'static str },

    #[error("invalid path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("{path:?} is a file, not a directory")]
    NotADirectory { path: String },

    #[error("{path:?} is a directory, not a file")]
    NotAFile { path: String },

    #[error("{path:?} does not exist")]
    NotFound { path: String },
}

impl PreviewErrorCode for TreeError {
    fn error_code(&self) -> &'static str {
        error_code::TREE_ERROR
    }
}
