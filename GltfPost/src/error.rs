//! Error types for `GltfPost`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `GltfPost` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Reading the input document failed.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Writing the output document failed.
    #[error("failed to write {path}: {source}")]
    Write {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML option file could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // ==================== Document Errors ====================
    /// A field the post-processor reads or writes has the wrong shape.
    #[error("malformed glTF at {path}: expected {expected}")]
    Malformed {
        /// JSON-pointer style location of the offending value.
        path: String,
        /// Description of what was expected there.
        expected: &'static str,
    },

    // ==================== Option Errors ====================
    /// A material factor was NaN or infinite.
    #[error("{name} factor must be finite, got {value}")]
    NonFiniteFactor {
        /// Which factor (`metallic` or `roughness`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl Error {
    /// Shorthand for [`Error::Malformed`].
    pub(crate) fn malformed(path: impl Into<String>, expected: &'static str) -> Self {
        Error::Malformed {
            path: path.into(),
            expected,
        }
    }
}

/// A specialized Result type for `GltfPost` operations.
pub type Result<T> = std::result::Result<T, Error>;
