//! FHIR resource model
//!
//! The subset of FHIR R4 needed to express QI-Core Patient, Encounter and
//! MedicationAdministration resources. Field names serialize in FHIR JSON
//! casing; optional elements are omitted rather than written as `null`.

use super::ids::ResourceId;
use super::records::StatusCode;
use serde::{Deserialize, Serialize};

/// Resource metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub profile: Vec<String>,
}

impl Meta {
    /// Metadata declaring conformance to a single profile
    pub fn with_profile(profile: &str) -> Self {
        Self {
            profile: vec![profile.to_string()],
        }
    }
}

/// A single coded concept
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl Coding {
    /// Builds a coding, omitting whichever parts are absent
    pub fn new(system: Option<&str>, code: Option<&str>, display: Option<&str>) -> Self {
        Self {
            system: system.map(str::to_string),
            code: code.map(str::to_string),
            display: display.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeableConcept {
    pub coding: Vec<Coding>,
}

impl CodeableConcept {
    pub fn single(coding: Coding) -> Self {
        Self {
            coding: vec![coding],
        }
    }
}

/// Literal reference to another resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub reference: String,
}

/// Time range with independently optional bounds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl Period {
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanName {
    #[serde(rename = "use")]
    pub use_: String,
    /// Always one entry; the entry itself is `null` when the source had no given name
    pub given: Vec<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

/// FHIR extension; complex extensions nest further extensions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_coding: Option<Coding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_string: Option<String>,
}

impl Extension {
    /// Extension holding nested extensions only
    pub fn complex(url: impl Into<String>, extension: Vec<Extension>) -> Self {
        Self {
            url: url.into(),
            extension,
            value_coding: None,
            value_string: None,
        }
    }

    pub fn coding(url: impl Into<String>, coding: Coding) -> Self {
        Self {
            url: url.into(),
            extension: Vec::new(),
            value_coding: Some(coding),
            value_string: None,
        }
    }

    pub fn string(url: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            extension: Vec::new(),
            value_coding: None,
            value_string: Some(value.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub resource_type: String,
    pub id: ResourceId,
    pub meta: Meta,
    pub active: bool,
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    pub name: Vec<HumanName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
}

impl Patient {
    pub const RESOURCE_TYPE: &'static str = "Patient";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospitalization {
    pub discharge_disposition: CodeableConcept,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encounter {
    pub resource_type: String,
    pub id: ResourceId,
    pub meta: Meta,
    pub status: StatusCode,
    #[serde(rename = "class", skip_serializing_if = "Option::is_none")]
    pub class: Option<Coding>,
    /// Empty when the source encounter carried no code
    #[serde(rename = "type")]
    pub type_: Vec<CodeableConcept>,
    pub subject: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospitalization: Option<Hospitalization>,
}

impl Encounter {
    pub const RESOURCE_TYPE: &'static str = "Encounter";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationAdministration {
    pub resource_type: String,
    pub id: ResourceId,
    pub meta: Meta,
    pub status: String,
    pub subject: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_period: Option<Period>,
    pub medication_codeable_concept: CodeableConcept,
}

impl MedicationAdministration {
    pub const RESOURCE_TYPE: &'static str = "MedicationAdministration";
}

/// Borrowed view of any built resource, used by sinks
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum ResourceRef<'a> {
    Patient(&'a Patient),
    Encounter(&'a Encounter),
    MedicationAdministration(&'a MedicationAdministration),
}

impl<'a> ResourceRef<'a> {
    /// Short lowercase name used for output file names
    pub fn kind(&self) -> &'static str {
        match self {
            ResourceRef::Patient(_) => "patient",
            ResourceRef::Encounter(_) => "encounter",
            ResourceRef::MedicationAdministration(_) => "medication",
        }
    }

    pub fn id(&self) -> &'a ResourceId {
        match self {
            ResourceRef::Patient(r) => &r.id,
            ResourceRef::Encounter(r) => &r.id,
            ResourceRef::MedicationAdministration(r) => &r.id,
        }
    }
}

/// Resources built from one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSet {
    pub patient: Patient,
    pub encounter: Option<Encounter>,
    pub medication: Option<MedicationAdministration>,
}

impl ResourceSet {
    /// Patient first, then encounter and medication when present
    pub fn iter(&self) -> impl Iterator<Item = ResourceRef<'_>> {
        std::iter::once(ResourceRef::Patient(&self.patient))
            .chain(self.encounter.as_ref().map(ResourceRef::Encounter))
            .chain(
                self.medication
                    .as_ref()
                    .map(ResourceRef::MedicationAdministration),
            )
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// A set always holds a patient
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coding_omits_absent_parts() {
        let coding = Coding::new(Some("http://snomed.info/sct"), Some("4525004"), None);
        assert_eq!(
            serde_json::to_value(&coding).unwrap(),
            json!({"system": "http://snomed.info/sct", "code": "4525004"})
        );
    }

    #[test]
    fn test_human_name_serializes_null_given() {
        let name = HumanName {
            use_: "usual".to_string(),
            given: vec![None],
            family: Some("Doe".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&name).unwrap(),
            json!({"use": "usual", "given": [null], "family": "Doe"})
        );
    }

    #[test]
    fn test_extension_camel_case() {
        let ext = Extension::string("text", "Asian");
        assert_eq!(
            serde_json::to_value(&ext).unwrap(),
            json!({"url": "text", "valueString": "Asian"})
        );
    }

    #[test]
    fn test_complex_extension_nests_children() {
        let ext = Extension::complex(
            "http://example.org/ext",
            vec![Extension::coding(
                "ombCategory",
                Coding::new(Some("urn:oid:2.16.840.1.113883.6.238"), Some("2106-3"), None),
            )],
        );
        assert_eq!(
            serde_json::to_value(&ext).unwrap(),
            json!({
                "url": "http://example.org/ext",
                "extension": [{
                    "url": "ombCategory",
                    "valueCoding": {"system": "urn:oid:2.16.840.1.113883.6.238", "code": "2106-3"}
                }]
            })
        );
    }

    #[test]
    fn test_period_is_empty() {
        assert!(Period::default().is_empty());
        let period = Period {
            start: Some("2024-01-01T08:00:00.000+00:00".to_string()),
            end: None,
        };
        assert!(!period.is_empty());
    }
}
