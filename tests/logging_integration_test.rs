//! Integration tests for logging functionality
//!
//! A global subscriber can only be installed once per process, so a single
//! test covers initialization end to end.

use qrda_fhir::config::LoggingConfig;
use qrda_fhir::core::convert::convert_document;
use qrda_fhir::domain::QrdaError;
use qrda_fhir::logging::init_logging;
use qrda_fhir::{log_document_converted, log_document_start, log_error_with_context};
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

const DOCUMENT: &[u8] = br#"<ClinicalDocument xmlns="urn:hl7-org:v3">
  <recordTarget><patientRole><id extension="p-log"/></patientRole></recordTarget>
</ClinicalDocument>"#;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "./logs");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_init_logging_writes_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };

    let guard = init_logging("debug", &config).unwrap();
    assert!(log_path.exists());

    // The default filter only admits events from this crate's library
    let resources = convert_document(DOCUMENT).unwrap();
    assert_eq!(resources.patient.id.as_str(), "p-log");

    // Events from the test binary itself fall outside the filter
    let document = Path::new("input/patient_a.xml");
    log_document_start!(document);
    log_document_converted!(document, 1usize, Duration::from_millis(7));
    let error = QrdaError::MalformedDocument("unexpected end of stream".to_string());
    log_error_with_context!(error, document.display());

    // Dropping the guard flushes the non-blocking writer
    drop(guard);

    let contents = std::fs::read_to_string(log_path.join("qrda-fhir.log")).unwrap();
    let lines: Vec<serde_json::Value> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert!(lines
        .iter()
        .any(|l| l["fields"]["message"] == "Logging initialized"));
    assert!(lines.iter().any(|l| {
        l["fields"]["message"] == "Assembled resource set"
            && l["target"] == "qrda_fhir::core::convert"
            && l["fields"]["encounter"] == false
    }));
    assert!(lines.iter().all(|l| l["level"] != "ERROR"));

    // A second subscriber cannot be installed
    assert!(init_logging("info", &LoggingConfig::default()).is_err());
}

#[test]
fn test_init_logging_rejects_unknown_level() {
    let result = init_logging("verbose", &LoggingConfig::default());
    assert!(matches!(result, Err(QrdaError::Configuration(_))));
}
