//! Error types for the data-loader crate.
//!
//! Every variant describes why a single artifact could not be loaded. The
//! store logs these and carries on with whatever did load, so callers outside
//! this crate rarely see them.

use thiserror::Error;

/// Errors that can occur while loading the catalog or a numeric artifact
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The catalog CSV could not be read
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// A JSON artifact could not be decoded
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// An artifact decoded fine but its dimensions are inconsistent
    #[error("Invalid shape for {artifact}: {reason}")]
    InvalidShape { artifact: String, reason: String },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// The catalog file was readable but produced no usable rows
    #[error("Catalog at {path} contains no usable rows")]
    EmptyCatalog { path: String },
}

impl DataLoadError {
    pub(crate) fn shape(artifact: &str, reason: impl Into<String>) -> Self {
        DataLoadError::InvalidShape {
            artifact: artifact.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
