//! Error types for dismantle-cli

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for dismantle-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in dismantle-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from the engine (validation, parsing, manifest I/O)
    #[error(transparent)]
    Core(#[from] dismantle_core::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error outside manifest loading
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Output serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
