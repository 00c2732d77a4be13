//! In-memory hierarchical file store.

use indexmap::IndexMap;

use crate::errors::TreeError;

/// A read-mostly filesystem built from host input.
///
/// Paths are relative, slash-separated and rooted at the tree root (`""`).
/// `.` components are ignored; `..` and empty components are rejected.
/// Entries keep insertion order within each directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualFileTree {
    root: DirNode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct DirNode {
    entries: IndexMap<String, Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Dir(DirNode),
    File(FileNode),
}

/// A file and its full text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    path: String,
    contents: String,
}

impl FileNode {
    /// Slash-joined path from the tree root.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Directory holding this file, `""` for the root.
    pub fn dir(&self) -> &str {
        self.path.rsplit_once('/').map(|(d, _)| d).unwrap_or("")
    }
}

/// What a directory listing yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirNode {
    /// Child directory `name`, created when missing.
    fn dir_mut(&mut self, name: &str, path_so_far: &str) -> Result<&mut DirNode, TreeError> {
        match self
            .entries
            .entry(name.to_string())
            .or_insert_with(|| Node::Dir(DirNode::default()))
        {
            Node::Dir(dir) => Ok(dir),
            Node::File(_) => Err(TreeError::NotADirectory {
                path: path_so_far.to_string(),
            }),
        }
    }
}

/// Split `path` into validated components.
fn components(path: &str) -> Result<Vec<&str>, TreeError> {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    let mut parts = Vec::new();
    for part in trimmed.split('/') {
        match part {
            "." => continue,
            "" => {
                return Err(TreeError::InvalidPath {
                    path: path.to_string(),
                    reason: "empty path component",
                })
            }
            ".." => {
                return Err(TreeError::InvalidPath {
                    path: path.to_string(),
                    reason: "parent directory references are not allowed",
                })
            }
            p => parts.push(p),
        }
    }
    Ok(parts)
}

/// Join path segments with `/`, skipping empty ones.
pub fn join(base: &str, name: &str) -> String {
    match (base.is_empty(), name.is_empty()) {
        (true, _) => name.to_string(),
        (_, true) => base.to_string(),
        _ => format!("{base}/{name}"),
    }
}

impl VirtualFileTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `path` and any missing parents. Existing directories are fine.
    pub fn create_dir_all(&mut self, path: &str) -> Result<(), TreeError> {
        let parts = components(path)?;
        let mut dir = &mut self.root;
        let mut walked = String::new();
        for part in parts {
            walked = join(&walked, part);
            dir = dir.dir_mut(part, &walked)?;
        }
        Ok(())
    }

    /// Create or truncate the file at `path`, creating missing parents.
    pub fn create_file(&mut self, path: &str, contents: impl Into<String>) -> Result<(), TreeError> {
        let parts = components(path)?;
        let Some((name, parents)) = parts.split_last() else {
            return Err(TreeError::InvalidPath {
                path: path.to_string(),
                reason: "a file needs a name",
            });
        };

        let mut dir = &mut self.root;
        let mut walked = String::new();
        for part in parents {
            walked = join(&walked, part);
            dir = dir.dir_mut(part, &walked)?;
        }

        let file_path = join(&walked, name);
        let file = FileNode {
            path: file_path.clone(),
            contents: contents.into(),
        };
        match dir.entries.get_mut(*name) {
            Some(Node::Dir(_)) => Err(TreeError::NotAFile { path: file_path }),
            Some(Node::File(existing)) => {
                *existing = file;
                Ok(())
            }
            None => {
                dir.entries.insert(name.to_string(), Node::File(file));
                Ok(())
            }
        }
    }

    fn lookup(&self, path: &str) -> Result<Option<&Node>, TreeError> {
        let parts = components(path)?;
        let mut dir = &self.root;
        let Some((last, parents)) = parts.split_last() else {
            return Ok(None);
        };
        for part in parents {
            match dir.entries.get(*part) {
                Some(Node::Dir(d)) => dir = d,
                _ => return Err(TreeError::NotFound { path: path.to_string() }),
            }
        }
        dir.entries
            .get(*last)
            .map(Some)
            .ok_or_else(|| TreeError::NotFound { path: path.to_string() })
    }

    /// Full contents of the file at `path`.
    pub fn read_to_string(&self, path: &str) -> Result<&str, TreeError> {
        match self.lookup(path)? {
            Some(Node::File(f)) => Ok(&f.contents),
            _ => Err(TreeError::NotAFile { path: path.to_string() }),
        }
    }

    /// Entries of the directory at `path` in insertion order.
    pub fn read_dir(&self, path: &str) -> Result<Vec<DirEntry>, TreeError> {
        let dir = match self.lookup(path)? {
            None => &self.root,
            Some(Node::Dir(d)) => d,
            Some(Node::File(_)) => {
                return Err(TreeError::NotADirectory { path: path.to_string() })
            }
        };
        Ok(dir
            .entries
            .iter()
            .map(|(name, node)| DirEntry {
                name: name.clone(),
                kind: match node {
                    Node::Dir(_) => EntryKind::Dir,
                    Node::File(_) => EntryKind::File,
                },
            })
            .collect())
    }

    pub fn exists(&self, path: &str) -> bool {
        self.lookup(path).is_ok()
    }

    pub fn is_dir(&self, path: &str) -> bool {
        matches!(self.lookup(path), Ok(None) | Ok(Some(Node::Dir(_))))
    }

    pub fn is_file(&self, path: &str) -> bool {
        matches!(self.lookup(path), Ok(Some(Node::File(_))))
    }

    /// Every file, depth-first in insertion order.
    pub fn files(&self) -> Vec<&FileNode> {
        fn walk<'a>(dir: &'a DirNode, out: &mut Vec<&'a FileNode>) {
            for (_, node) in &dir.entries {
                match node {
                    Node::File(f) => out.push(f),
                    Node::Dir(d) => walk(d, out),
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.root, &mut out);
        out
    }

    /// Every directory path below the root, depth-first in insertion order.
    pub fn dirs(&self) -> Vec<String> {
        fn walk(dir: &DirNode, base: &str, out: &mut Vec<String>) {
            for (name, node) in &dir.entries {
                if let Node::Dir(d) = node {
                    let path = join(base, name);
                    out.push(path.clone());
                    walk(d, &path, out);
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.root, "", &mut out);
        out
    }

    pub fn file_count(&self) -> usize {
        self.files().len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.entries.is_empty()
    }
}
