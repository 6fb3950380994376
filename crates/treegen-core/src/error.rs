//! Error types for treegen operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type for treegen operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while parsing a tree file or building the structure
#[derive(Debug, Error)]
pub enum CoreError {
    /// Tree file could not be opened, read, or decoded as UTF-8
    #[error("Failed to read tree file {}", path.display())]
    ReadTree {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory creation failed
    #[error("Failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stub file creation failed
    #[error("Failed to write stub file {}", path.display())]
    WriteStub {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a status line to the console failed
    #[error("Failed to write status output")]
    Console(#[source] std::io::Error),

    /// Folder name was empty after trimming
    #[error("Invalid folder name: {0:?}")]
    InvalidFolderName(String),
}

impl CoreError {
    /// Get the error code for CLI output and logs
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::ReadTree { .. } => "READ_ERROR",
            Self::CreateDir { .. } | Self::WriteStub { .. } => "WRITE_ERROR",
            Self::Console(_) => "OUTPUT_ERROR",
            Self::InvalidFolderName(_) => "VALIDATION_ERROR",
        }
    }
}
