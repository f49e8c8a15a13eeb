//! Terminology mapping
//!
//! Stateless lookups over the static tables. Unknown inputs never fail:
//! unrecognized OIDs map to themselves, unrecognized class or disposition
//! codes map to `None`.

use super::tables::{
    VocabularyEntry, ACT_CODE_SYSTEM, CODE_SYSTEM_MAPPINGS, DISCHARGE_DISPOSITION_MAPPINGS,
    ENCOUNTER_CLASS_MAPPINGS, VOCABULARY_MAPPINGS,
};
use crate::domain::fhir::Coding;
use crate::domain::records::StatusCode;

/// Map a code system OID to its canonical FHIR URI
///
/// Returns the input unchanged when the OID is not in the table.
///
/// # Examples
///
/// ```
/// use qrda_fhir::core::terminology::map_code_system;
///
/// assert_eq!(map_code_system("2.16.840.1.113883.6.96"), "http://snomed.info/sct");
/// assert_eq!(map_code_system("unknown-system"), "unknown-system");
/// ```
pub fn map_code_system(oid: &str) -> &str {
    CODE_SYSTEM_MAPPINGS
        .iter()
        .find(|(key, _)| *key == oid)
        .map(|(_, uri)| *uri)
        .unwrap_or(oid)
}

/// Normalize a source status code
///
/// Case-insensitive: `completed` → `finished`, `in-progress` → `in-progress`,
/// everything else (including no status) → `unknown`.
pub fn normalize_status(raw: Option<&str>) -> StatusCode {
    let Some(raw) = raw else {
        return StatusCode::Unknown;
    };

    match raw.trim().to_lowercase().as_str() {
        "completed" => StatusCode::Finished,
        "in-progress" => StatusCode::InProgress,
        _ => StatusCode::Unknown,
    }
}

/// Map a clinical encounter code to its encounter class coding
pub fn map_encounter_class(code: Option<&str>) -> Option<Coding> {
    let code = code?;
    ENCOUNTER_CLASS_MAPPINGS
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, class)| Coding::new(Some(ACT_CODE_SYSTEM), Some(class.code), Some(class.display)))
}

/// Map a clinical discharge code to its discharge disposition coding
pub fn map_discharge_disposition(code: Option<&str>) -> Option<Coding> {
    let code = code?;
    DISCHARGE_DISPOSITION_MAPPINGS
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, d)| Coding::new(Some(d.system), Some(d.code), Some(d.display)))
}

/// Look up a vocabulary by its CDA `codeSystemName` (case-insensitive)
pub fn vocabulary(name: &str) -> Option<&'static VocabularyEntry> {
    VOCABULARY_MAPPINGS
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name.trim()))
}
