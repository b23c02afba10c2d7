//! Radiation computation errors.

use std::path::PathBuf;

use tf_core::TfError;
use thiserror::Error;

/// Result type for radiation operations.
pub type RadiationResult<T> = Result<T, RadiationError>;

/// Errors that can occur while evaluating radiation quantities or loading
/// spectral tables.
#[derive(Error, Debug)]
pub enum RadiationError {
    /// Model selector not recognized.
    #[error("Unsupported solar model: '{model}'")]
    UnsupportedModel { model: String },

    /// Numeric domain error (division by zero, overflow, non-finite result).
    #[error("Numeric domain error: {0}")]
    Domain(#[from] TfError),

    /// Data table could not be opened.
    #[error("Could not open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data table could not be read after opening.
    #[error("Could not read spectral table: {0}")]
    Read(#[from] std::io::Error),

    /// Malformed row or empty table.
    #[error("Parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

impl From<RadiationError> for TfError {
    fn from(err: RadiationError) -> Self {
        match err {
            RadiationError::Domain(inner) => inner,
            RadiationError::UnsupportedModel { model } => TfError::NotSupported {
                what: format!("solar model '{model}'"),
            },
            other => TfError::Resource {
                message: other.to_string(),
            },
        }
    }
}
