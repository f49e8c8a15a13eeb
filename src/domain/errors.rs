//! Domain error types
//!
//! This module defines the error hierarchy for QRDA-FHIR.
//! Errors are domain-specific; third-party error types are converted at the boundary.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main QRDA-FHIR error type
///
/// This is the primary error type used throughout the application.
/// Absent fields and unmapped terminology are never errors; only failures that
/// invalidate a whole document (or the surrounding tooling) surface here.
#[derive(Debug, Error)]
pub enum QrdaError {
    /// Input bytes are not a well-formed XML document
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// A timestamp is present in the document but cannot be parsed
    #[error("Malformed timestamp in {field}: '{value}'")]
    MalformedTimestamp {
        /// Logical field the timestamp was read for (e.g. `encounter.period.start`)
        field: &'static str,
        /// Raw value as found in the document
        value: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Writing converted resources failed
    #[error("Output error: {0}")]
    Output(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl QrdaError {
    /// Whether the error invalidates a single document rather than the whole run
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            QrdaError::MalformedDocument(_) | QrdaError::MalformedTimestamp { .. }
        )
    }
}

/// A conversion failure attributed to exactly one source document
#[derive(Debug, Clone)]
pub struct DocumentFailure {
    /// Path of the document that failed
    pub path: PathBuf,

    /// Error message
    pub message: String,

    /// Whether the document itself was at fault (as opposed to I/O or output)
    pub document_error: bool,
}

impl DocumentFailure {
    /// Creates a failure record for the document at `path`
    pub fn new(path: impl AsRef<Path>, error: &QrdaError) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            message: error.to_string(),
            document_error: error.is_document_error(),
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for QrdaError {
    fn from(err: std::io::Error) -> Self {
        QrdaError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for QrdaError {
    fn from(err: serde_json::Error) -> Self {
        QrdaError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for QrdaError {
    fn from(err: toml::de::Error) -> Self {
        QrdaError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from XML parse errors
impl From<roxmltree::Error> for QrdaError {
    fn from(err: roxmltree::Error) -> Self {
        QrdaError::MalformedDocument(err.to_string())
    }
}
