//! Operating-system backed [`Filesystem`]

use std::fs;
use std::path::Path;

use crate::{Error, Filesystem, Result, io};

/// The real filesystem.
///
/// File writes go through [`io::write_atomic`] so an interrupted write never
/// leaves a truncated file at the target path.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl OsFs {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for OsFs {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        tracing::debug!(path = %path.display(), "Creating directory");
        fs::create_dir_all(path).map_err(|e| Error::io(path, e))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> Result<()> {
        if path.is_dir() {
            return Err(Error::IsADirectory {
                path: path.to_path_buf(),
            });
        }
        io::write_atomic(path, content)
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| Error::io(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
