//! Host value → `VirtualFileTree`.

use serde_json::{Map, Value};

use super::tree::{join, VirtualFileTree};
use crate::errors::TreeError;
use crate::tracing::fields;
use crate::types::parameters::value_kind;

/// A decoded host value at one position in the tree.
#[derive(Debug)]
pub enum HostNode<'a> {
    File(&'a str),
    Directory(&'a Map<String, Value>),
    Other(&'a Value),
}

impl<'a> From<&'a Value> for HostNode<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(s) => Self::File(s),
            Value::Object(map) => Self::Directory(map),
            other => Self::Other(other),
        }
    }
}

/// An entry the builder skipped, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: String,
    pub reason: String,
}

/// Result of a successful build.
#[derive(Debug, Default)]
pub struct BuiltTree {
    pub tree: VirtualFileTree,
    pub skipped: Vec<SkippedEntry>,
}

/// Recursively materializes a host object into a `VirtualFileTree`.
///
/// String values become files, objects become directories, everything else
/// is skipped with a `warn` record. Failures below the top level never abort
/// the build.
pub struct TreeBuilder {
    max_depth: usize,
}

impl TreeBuilder {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn build(&self, value: &Value) -> Result<BuiltTree, TreeError> {
        let root = match HostNode::from(value) {
            HostNode::Directory(map) => map,
            HostNode::File(_) | HostNode::Other(_) => {
                return Err(TreeError::NotAMapping {
                    found: value_kind(value),
                })
            }
        };

        let mut built = BuiltTree::default();
        self.load(&mut built, root, "", 0);
        tracing::debug!(
            prefix = fields::PREFIX_FILETREE,
            files = built.tree.file_count(),
            skipped = built.skipped.len(),
            "file tree loaded"
        );
        Ok(built)
    }

    fn load(&self, built: &mut BuiltTree, entries: &Map<String, Value>, dir: &str, depth: usize) {
        if let Err(e) = built.tree.create_dir_all(dir) {
            skip(built, dir, format!("error creating directory: {e}"));
            return;
        }

        for (key, value) in entries {
            let path = join(dir, key);
            match HostNode::from(value) {
                HostNode::File(contents) => {
                    if let Err(e) = built.tree.create_file(&path, contents) {
                        skip(built, &path, format!("error creating file: {e}"));
                    }
                }
                HostNode::Directory(children) => {
                    if depth + 1 > self.max_depth {
                        skip(
                            built,
                            &path,
                            format!("nesting exceeds the maximum depth of {}", self.max_depth),
                        );
                        continue;
                    }
                    self.load(built, children, &path, depth + 1);
                }
                HostNode::Other(other) => {
                    skip(built, &path, format!("unknown type {}", value_kind(other)));
                }
            }
        }
    }
}

fn skip(built: &mut BuiltTree, path: &str, reason: String) {
    tracing::warn!(
        prefix = fields::PREFIX_FILETREE,
        root = path,
        err = %reason,
        "skipping file tree entry"
    );
    built.skipped.push(SkippedEntry {
        path: path.to_string(),
        reason,
    });
}
