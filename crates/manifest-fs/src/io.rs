//! Atomic file writes with locking

use std::io::Write;
use std::path::Path;

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Write content atomically to a file.
///
/// The bytes go to a short-named temporary file in the same directory and
/// are persisted over `path` only once fully flushed, so readers see either
/// the old content or the new content. The temp name length does not depend
/// on the target's, so any name the directory accepts can be written. The
/// parent directory must already exist.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let dir = parent_dir(path);

    // Dropped (and removed) on every early return.
    let mut temp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;

    temp.as_file().lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;
    temp.write_all(content)
        .map_err(|e| Error::io(temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| Error::io(temp.path(), e))?;
    FileExt::unlock(temp.as_file()).map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    temp.persist(path).map_err(|e| Error::io(path, e.error))?;
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
