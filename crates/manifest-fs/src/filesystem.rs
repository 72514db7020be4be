//! The filesystem capability trait

use std::path::Path;

use crate::Result;

/// Filesystem operations needed to materialize resources.
///
/// Implementations decide where bytes actually land: [`crate::OsFs`] talks
/// to the operating system, [`crate::MemoryFs`] keeps everything in memory.
pub trait Filesystem: Send + Sync {
    /// Create a directory and every missing ancestor.
    ///
    /// Succeeds when the directory already exists.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Write `content` to a file, creating it or replacing its content.
    ///
    /// The parent directory must already exist.
    fn write_file(&self, path: &Path, content: &[u8]) -> Result<()>;

    /// Read the full content of a file.
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;

    /// Check whether a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

impl<F: Filesystem + ?Sized> Filesystem for &F {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        (**self).create_dir_all(path)
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> Result<()> {
        (**self).write_file(path, content)
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        (**self).read_file(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}
