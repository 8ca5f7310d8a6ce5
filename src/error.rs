//! Error types for the catalog pipeline.

use std::path::PathBuf;

/// Errors that can occur while loading the catalog or writing the report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input catalog does not exist.
    #[error("File not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Report settings could not be built.
    #[error("Invalid settings: {0}")]
    Settings(String),
}

impl From<derive_builder::UninitializedFieldError> for Error {
    fn from(value: derive_builder::UninitializedFieldError) -> Self {
        Error::Settings(value.to_string())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
