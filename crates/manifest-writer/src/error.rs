//! Error types for manifest-writer

use std::path::PathBuf;

use crate::WriteResult;

/// Result type for manifest-writer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while materializing resources.
///
/// None of these are retried; the caller decides what to do with them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create directories for {path}: {source}")]
    CreateDirectories {
        path: PathBuf,
        #[source]
        source: manifest_fs::Error,
    },

    #[error("failed to write file for {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: manifest_fs::Error,
    },

    #[error("failed to read file for {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: manifest_fs::Error,
    },

    #[error("failed to serialize {format} document for {path}: {message}")]
    Serialize {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("failed to parse {format} document at {path}: {message}")]
    Deserialize {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("failed to resolve destination: {0}")]
    Destination(#[from] manifest_fs::Error),

    #[error("destination path must not be empty")]
    EmptyDestination,

    #[error("invalid resource path {path:?}: {reason}")]
    InvalidResourcePath { path: String, reason: &'static str },
}

impl Error {
    /// The target path this error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::CreateDirectories { path, .. }
            | Self::WriteFile { path, .. }
            | Self::ReadFile { path, .. }
            | Self::Serialize { path, .. }
            | Self::Deserialize { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }
}

/// A write that stopped at its first error.
///
/// `written` holds every path committed before the failure; those files are
/// left in place.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct WriteFailure {
    pub written: WriteResult,
    pub error: Error,
}

impl WriteFailure {
    pub fn new(written: WriteResult, error: Error) -> Self {
        Self { written, error }
    }

    pub fn into_error(self) -> Error {
        self.error
    }
}

impl From<Error> for WriteFailure {
    fn from(error: Error) -> Self {
        Self::new(WriteResult::default(), error)
    }
}
