//! Error types for the virtual file system.

use thiserror::Error;

/// Common error type for the process-level plumbing (config, help, I/O).
///
/// Command failures are not reported through this type; they are
/// [`CommandError`](crate::command::CommandError) values rendered as
/// response lines while the process keeps running.
#[derive(Error, Debug)]
pub enum VfsError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Help text could not be produced.
    #[error("help error: {0}")]
    Help(String),
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, VfsError>;
