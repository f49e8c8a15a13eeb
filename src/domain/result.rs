//! Result type alias for QRDA-FHIR

use super::errors::QrdaError;

/// Result type alias for QRDA-FHIR operations
///
/// # Examples
///
/// ```
/// use qrda_fhir::domain::result::Result;
/// use qrda_fhir::domain::errors::QrdaError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(QrdaError::MalformedDocument("empty input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, QrdaError>;
