//! Extracted records
//!
//! Plain values pulled out of a QRDA document by the extractors, before any
//! FHIR shaping. Every field that depends on a node or attribute in the source
//! is an `Option`; `None` means the node or attribute was absent.

use super::ids::ResourceId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized status of an encounter or administration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusCode {
    /// Source status `completed`
    Finished,
    /// Source status `in-progress`
    InProgress,
    /// Anything else, including no status at all
    #[default]
    Unknown,
}

impl StatusCode {
    /// FHIR code for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCode::Finished => "finished",
            StatusCode::InProgress => "in-progress",
            StatusCode::Unknown => "unknown",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A coded element as it appears in CDA (`code`, `codeSystem`, `codeSystemName`, `displayName`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodedValue {
    pub code: Option<String>,
    /// Code system OID
    pub code_system: Option<String>,
    pub code_system_name: Option<String>,
    pub display: Option<String>,
}

impl CodedValue {
    /// A coded value only counts as present when it carries a code
    pub fn has_code(&self) -> bool {
        self.code.is_some()
    }
}

/// Patient name parts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonName {
    pub given: Option<String>,
    pub family: Option<String>,
}

/// Patient demographics extracted from the record target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientRecord {
    /// Source patient id, or a generated one
    pub id: ResourceId,

    /// Raw birth time (`YYYYMMDD...`)
    pub birth_date: Option<String>,

    /// Lowercased administrative gender code, `"unknown"` when absent
    pub gender: String,

    pub name: PersonName,

    /// Race code; only `code`, `code_system` and `display` are populated
    pub race: CodedValue,

    /// Ethnic group code; same shape as `race`
    pub ethnicity: CodedValue,
}

/// Encounter facts from the first `entry/encounter`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncounterRecord {
    pub encounter_id: Option<String>,

    /// Status, already normalized at extraction
    pub status: Option<StatusCode>,

    /// Raw `effectiveTime/low/@value`
    pub low_time: Option<String>,

    /// Raw `effectiveTime/high/@value`
    pub high_time: Option<String>,

    /// Encounter type code
    pub code: CodedValue,

    pub discharge_disposition: CodedValue,
}

/// Medication administration facts from the first `entry/substanceAdministration`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicationRecord {
    pub medication_id: Option<String>,
    pub low_time: Option<String>,
    pub high_time: Option<String>,

    /// Status, already normalized at extraction
    pub status: Option<StatusCode>,

    /// Consumable `manufacturedMaterial/code`
    pub code: CodedValue,
}

/// Everything extracted from one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    pub patient: PatientRecord,
    pub encounter: Option<EncounterRecord>,
    pub medication: Option<MedicationRecord>,
}
