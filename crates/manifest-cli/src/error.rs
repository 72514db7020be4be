//! Error types for manifest-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from manifest-writer
    #[error(transparent)]
    Writer(#[from] manifest_writer::Error),

    /// A write that stopped partway
    #[error(transparent)]
    Write(#[from] manifest_writer::WriteFailure),

    /// Logging could not be initialized
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
