//! Virtual filesystem handed to the analysis engine.

pub mod builder;
pub mod tree;

pub use builder::{BuiltTree, HostNode, SkippedEntry, TreeBuilder};
pub use tree::{DirEntry, EntryKind, FileNode, VirtualFileTree};
