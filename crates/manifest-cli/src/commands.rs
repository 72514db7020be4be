//! Command implementations

use std::path::Path;

use colored::Colorize;

use manifest_fs::{Filesystem, MemoryFs, OsFs};
use manifest_writer::{Destination, ResourceWriter, Resources, WriteResult, load_resource};

use crate::error::Result;

/// Load `bundle` and write its documents under `destination`.
///
/// When a write stops partway, the files that did land are still listed
/// before the error is returned.
pub fn run_write(bundle: &Path, destination: &str, dry_run: bool) -> Result<()> {
    let resources: Resources = load_resource(&OsFs, bundle)?;
    tracing::debug!(bundle = %bundle.display(), count = resources.len(), "Loaded bundle");

    let written = if dry_run {
        write_with(&MemoryFs::new(), destination, &resources, dry_run)?
    } else {
        write_with(&OsFs, destination, &resources, dry_run)?
    };

    if written.is_empty() {
        println!("{}", "Bundle is empty, nothing written".dimmed());
    }
    Ok(())
}

fn write_with<F: Filesystem>(
    fs: &F,
    destination: &str,
    resources: &Resources,
    dry_run: bool,
) -> Result<WriteResult> {
    match ResourceWriter::new(fs).write(destination, resources) {
        Ok(written) => {
            report(&written, dry_run);
            Ok(written)
        }
        Err(failure) => {
            report(&failure.written, dry_run);
            Err(failure.into())
        }
    }
}

fn report(written: &WriteResult, dry_run: bool) {
    for path in written {
        if dry_run {
            println!("{} Would write {}", "[dry-run]".yellow(), path.display());
        } else {
            println!("{} {}", "wrote".green(), path.display());
        }
    }
}

/// Print the resolved destination root.
pub fn run_resolve(destination: &str) -> Result<()> {
    let resolved = Destination::new(destination)?.resolve()?;
    println!("{}", resolved);
    Ok(())
}
