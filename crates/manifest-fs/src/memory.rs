//! In-memory [`Filesystem`] for tests and dry runs

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{Error, Filesystem, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Dir,
    File(Vec<u8>),
}

#[derive(Debug, Default)]
struct State {
    nodes: BTreeMap<PathBuf, Node>,
    denied: Vec<PathBuf>,
}

/// A filesystem held entirely in memory.
///
/// The root (`/`) and the working directory (the empty relative path) always
/// exist. Paths are compared component-wise, so `a//b` and `a/./b` name the
/// same node as `a/b`. Use [`MemoryFs::deny`] to make a subtree read-only.
#[derive(Debug, Default)]
pub struct MemoryFs {
    state: Mutex<State>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse every mutation at or below `prefix` with
    /// [`Error::PermissionDenied`]. Existing directories can still be
    /// "created" again since that changes nothing.
    pub fn deny(&self, prefix: impl AsRef<Path>) {
        self.lock().denied.push(key(prefix.as_ref()));
    }

    /// All stored files, in path order.
    pub fn files(&self) -> Vec<PathBuf> {
        self.lock()
            .nodes
            .iter()
            .filter(|(_, node)| matches!(node, Node::File(_)))
            .map(|(path, _)| path.clone())
            .collect()
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        let path = key(path.as_ref());
        is_root(&path) || matches!(self.lock().nodes.get(&path), Some(Node::Dir))
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl State {
    fn ensure_writable(&self, path: &Path) -> Result<()> {
        if self.denied.iter().any(|prefix| path.starts_with(prefix)) {
            return Err(Error::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }
}

impl Filesystem for MemoryFs {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let path = key(path);
        let mut state = self.lock();

        let mut missing: Vec<&Path> = path.ancestors().take_while(|p| !is_root(p)).collect();
        missing.reverse();

        for dir in missing {
            match state.nodes.get(dir) {
                Some(Node::Dir) => continue,
                Some(Node::File(_)) => {
                    return Err(Error::NotADirectory {
                        path: dir.to_path_buf(),
                    });
                }
                None => {
                    state.ensure_writable(dir)?;
                    state.nodes.insert(dir.to_path_buf(), Node::Dir);
                }
            }
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> Result<()> {
        let path = key(path);
        if is_root(&path) {
            return Err(Error::IsADirectory { path });
        }

        let mut state = self.lock();

        if let Some(parent) = path.parent().filter(|p| !is_root(p)) {
            match state.nodes.get(parent) {
                Some(Node::Dir) => {}
                Some(Node::File(_)) => {
                    return Err(Error::NotADirectory {
                        path: parent.to_path_buf(),
                    });
                }
                None => {
                    return Err(Error::NotFound {
                        path: parent.to_path_buf(),
                    });
                }
            }
        }

        if let Some(Node::Dir) = state.nodes.get(&path) {
            return Err(Error::IsADirectory { path });
        }
        state.ensure_writable(&path)?;
        state.nodes.insert(path, Node::File(content.to_vec()));
        Ok(())
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let path = key(path);
        match self.lock().nodes.get(&path) {
            Some(Node::File(content)) => Ok(content.clone()),
            Some(Node::Dir) => Err(Error::IsADirectory { path }),
            None if is_root(&path) => Err(Error::IsADirectory { path }),
            None => Err(Error::NotFound { path }),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        let path = key(path);
        is_root(&path) || self.lock().nodes.contains_key(&path)
    }
}

fn key(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// `/` (or a bare prefix on Windows) and the empty working-directory path.
fn is_root(path: &Path) -> bool {
    path.parent().is_none()
}
