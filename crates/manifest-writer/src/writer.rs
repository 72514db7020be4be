//! Writes resource sets to a filesystem

use std::path::PathBuf;

use serde::Serialize;

use manifest_fs::{Filesystem, NormalizedPath};

use crate::{Destination, Error, Format, Resources, Result, WriteFailure, WriteResult};

/// Write every resource under `destination` using the home directory from
/// the environment.
///
/// See [`ResourceWriter::write`].
pub fn write_resources<F, T>(
    fs: &F,
    destination: &str,
    resources: &Resources<T>,
) -> std::result::Result<WriteResult, WriteFailure>
where
    F: Filesystem + ?Sized,
    T: Serialize,
{
    ResourceWriter::new(fs).write(destination, resources)
}

/// Materializes [`Resources`] onto a [`Filesystem`].
pub struct ResourceWriter<'a, F: Filesystem + ?Sized> {
    fs: &'a F,
    home: Option<PathBuf>,
}

impl<'a, F: Filesystem + ?Sized> ResourceWriter<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs, home: None }
    }

    /// Expand `~` with this directory instead of reading the environment.
    pub fn with_home_dir(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Resolve the destination root once, before anything is written.
    pub fn resolve(&self, destination: &Destination) -> Result<NormalizedPath> {
        match &self.home {
            Some(home) => destination.resolve_with_home(home),
            None => destination.resolve(),
        }
    }

    /// Write each resource to `<destination>/<key>`, in key order.
    ///
    /// Parent directories are created as needed and existing files are
    /// replaced. The first failure stops the run: later resources are not
    /// attempted, files already written stay on disk, and the returned
    /// [`WriteFailure`] carries both the error and the paths written so far.
    pub fn write<T: Serialize>(
        &self,
        destination: &str,
        resources: &Resources<T>,
    ) -> std::result::Result<WriteResult, WriteFailure> {
        let destination = Destination::new(destination)?;
        let base = self.resolve(&destination)?;

        let mut written = WriteResult::default();
        for (relative_path, document) in resources.iter() {
            match self.write_one(&base, relative_path, document) {
                Ok(path) => written.push(path),
                Err(error) => {
                    tracing::debug!(
                        destination = %base,
                        written = written.len(),
                        "Aborting resource write: {}",
                        error
                    );
                    return Err(WriteFailure::new(written, error));
                }
            }
        }

        tracing::info!(destination = %base, count = written.len(), "Wrote resources");
        Ok(written)
    }

    fn write_one<T: Serialize>(
        &self,
        base: &NormalizedPath,
        relative_path: &str,
        document: &T,
    ) -> Result<PathBuf> {
        let target = base.join(check_relative_path(relative_path)?);
        let native = target.to_native();

        if let Some(parent) = target.parent() {
            self.fs
                .create_dir_all(&parent.to_native())
                .map_err(|source| Error::CreateDirectories {
                    path: native.clone(),
                    source,
                })?;
        }

        let content = Format::from_path(&target).serialize(&native, document)?;

        self.fs
            .write_file(&native, content.as_bytes())
            .map_err(|source| Error::WriteFile {
                path: native.clone(),
                source,
            })?;

        tracing::debug!(path = %target, bytes = content.len(), "Wrote resource");
        Ok(native)
    }
}

fn check_relative_path(path: &str) -> Result<&str> {
    let reason = if path.is_empty() {
        "path is empty"
    } else if path.ends_with('/') {
        "path has no file name"
    } else {
        return Ok(path);
    };
    Err(Error::InvalidResourcePath {
        path: path.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use manifest_fs::MemoryFs;
    use std::path::Path;

    fn single(path: &str) -> Resources<serde_yaml::Value> {
        let mut resources = Resources::new();
        resources.insert(path, serde_yaml::Value::String("value".into()));
        resources
    }

    #[test]
    fn empty_key_is_rejected_before_touching_fs() {
        let fs = MemoryFs::new();
        let failure = ResourceWriter::new(&fs).write("/out", &single("")).unwrap_err();

        assert!(matches!(failure.error, Error::InvalidResourcePath { .. }));
        assert!(failure.written.is_empty());
        assert!(!fs.exists(Path::new("/out")));
    }

    #[test]
    fn directory_key_is_rejected() {
        let fs = MemoryFs::new();
        let failure = ResourceWriter::new(&fs).write("/out", &single("config/")).unwrap_err();
        assert!(failure.to_string().contains("path has no file name"));
    }

    #[test]
    fn empty_destination_is_rejected() {
        let fs = MemoryFs::new();
        let failure = ResourceWriter::new(&fs).write("", &single("a.yaml")).unwrap_err();
        assert!(matches!(failure.error, Error::EmptyDestination));
    }

    #[test]
    fn pinned_home_is_used_for_tilde() {
        let fs = MemoryFs::new();
        let written = ResourceWriter::new(&fs)
            .with_home_dir("/home/dev")
            .write("~/manifest", &single("ns/a.yaml"))
            .unwrap();

        assert_eq!(written.paths(), &[PathBuf::from("/home/dev/manifest/ns/a.yaml")]);
    }

    #[test]
    fn relative_destination_stays_relative() {
        let fs = MemoryFs::new();
        let written = ResourceWriter::new(&fs)
            .write("out", &single("a.yaml"))
            .unwrap();

        assert_eq!(written.paths(), &[PathBuf::from("out/a.yaml")]);
        assert!(fs.is_dir("out"));
    }
}
