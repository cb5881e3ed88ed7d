//! Error types for the dismantling engine.
//!
//! Only the Manifest Loader can fail. Once a [`Manifest`](crate::Manifest)
//! exists, synthesis and aggregation are total.

use std::path::{Path, PathBuf};

/// Errors that can occur while loading a manifest.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The manifest is structurally valid but breaks a field constraint.
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation, e.g. `components[2].mass_kg`
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// The serialized manifest could not be parsed.
    #[error("Parse error ({format}): {message}")]
    Parse {
        /// Document format that was being parsed
        format: &'static str,
        /// Message reported by the underlying parser, verbatim
        message: String,
    },

    /// I/O error while reading a manifest file.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The manifest file extension maps to no known format.
    #[error("Unsupported manifest format: {extension:?}")]
    UnsupportedFormat {
        /// Extension that was found (empty when the path has none)
        extension: String,
    },
}

/// Convenience `Result` type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether the error describes bad input rather than an
    /// environment failure.
    ///
    /// Nothing here is transient, so there is no retry classification;
    /// callers only need to know whether to blame the request.
    pub fn is_input_error(&self) -> bool {
        match self {
            Error::Validation { .. } => true,
            Error::Parse { .. } => true,
            Error::UnsupportedFormat { .. } => true,
            Error::Io { .. } => false,
        }
    }

    /// Returns the offending field, if the error names one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new parse error for the given format.
    pub fn parse<S: Into<String>>(format: &'static str, message: S) -> Self {
        Error::Parse {
            format,
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

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::parse("json", err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::parse("toml", err.to_string())
    }
}
