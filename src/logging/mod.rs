//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels
//! - Console output
//! - JSON-formatted local file logging with rotation
//!
//! Document-level macros log paths and counts only. Patient values never
//! appear above `debug`.
//!
//! # Example
//!
//! ```no_run
//! use qrda_fhir::logging::init_logging;
//! use qrda_fhir::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! // Use tracing macros for logging
//! tracing::info!("Application started");
//! tracing::error!(error = "Something went wrong", "Error occurred");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a document conversion
///
/// # Example
///
/// ```no_run
/// use qrda_fhir::log_document_start;
/// use std::path::Path;
///
/// log_document_start!(Path::new("input/patient_a.xml"));
/// ```
#[macro_export]
macro_rules! log_document_start {
    ($path:expr) => {
        tracing::debug!(
            document = %$path.display(),
            "Converting document"
        );
    };
}

/// Log a converted document
///
/// # Example
///
/// ```no_run
/// use qrda_fhir::log_document_converted;
/// use std::path::Path;
/// use std::time::Duration;
///
/// log_document_converted!(Path::new("input/patient_a.xml"), 3, Duration::from_millis(12));
/// ```
#[macro_export]
macro_rules! log_document_converted {
    ($path:expr, $resources:expr, $duration:expr) => {
        tracing::info!(
            document = %$path.display(),
            resources = $resources,
            duration_ms = $duration.as_millis() as u64,
            "Document converted"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use qrda_fhir::log_error_with_context;
/// use qrda_fhir::domain::QrdaError;
///
/// let error = QrdaError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = %$context,
            "Error occurred"
        );
    };
}

/// Log batch progress
///
/// # Example
///
/// ```no_run
/// use qrda_fhir::log_batch_progress;
///
/// log_batch_progress!(10, 250);
/// ```
#[macro_export]
macro_rules! log_batch_progress {
    ($current:expr, $total:expr) => {
        tracing::debug!(
            current = $current,
            total = $total,
            progress_pct = ($current as f64 / $total as f64 * 100.0),
            "Batch progress"
        );
    };
}
