//! Static terminology tables
//!
//! Process-wide constant data. Lookups live in [`super::mapper`].

/// QI-Core Patient profile
pub const QICORE_PATIENT_PROFILE: &str =
    "http://hl7.org/fhir/us/qicore/StructureDefinition/qicore-patient";
/// QI-Core Encounter profile
pub const QICORE_ENCOUNTER_PROFILE: &str =
    "http://hl7.org/fhir/us/qicore/StructureDefinition/qicore-encounter";
/// QI-Core MedicationAdministration profile
pub const QICORE_MEDICATION_PROFILE: &str =
    "http://hl7.org/fhir/us/qicore/StructureDefinition/qicore-medicationadministration";

pub const SNOMED_SYSTEM: &str = "http://snomed.info/sct";
pub const LOINC_SYSTEM: &str = "http://loinc.org";
pub const RXNORM_SYSTEM: &str = "http://www.nlm.nih.gov/research/umls/rxnorm";

pub const US_CORE_RACE_URL: &str = "http://hl7.org/fhir/us/core/StructureDefinition/us-core-race";
pub const US_CORE_ETHNICITY_URL: &str =
    "http://hl7.org/fhir/us/core/StructureDefinition/us-core-ethnicity";
/// CDC Race & Ethnicity code system, used for both race and ethnicity categories
pub const OMB_RACE_SYSTEM: &str = "urn:oid:2.16.840.1.113883.6.238";

pub const ACT_CODE_SYSTEM: &str = "http://terminology.hl7.org/CodeSystem/v3-ActCode";
pub const DISCHARGE_DISPOSITION_SYSTEM: &str =
    "http://terminology.hl7.org/CodeSystem/discharge-disposition";

pub const DEFAULT_ENCOUNTER_STATUS: &str = "unknown";
pub const DEFAULT_MEDICATION_STATUS: &str = "completed";
pub const DEFAULT_MEDICATION_CODE: &str = "unknown";

/// Code system OID → canonical FHIR system URI
pub const CODE_SYSTEM_MAPPINGS: &[(&str, &str)] = &[
    ("2.16.840.1.113883.6.96", SNOMED_SYSTEM),
    ("2.16.840.1.113883.6.1", LOINC_SYSTEM),
    ("2.16.840.1.113883.6.88", RXNORM_SYSTEM),
];

/// Value set base shared by every vocabulary in [`VOCABULARY_MAPPINGS`]
pub const VSAC_VALUE_SET_BASE: &str = "http://cts.nlm.nih.gov/fhir/ValueSet/";

/// A vocabulary known by its CDA `codeSystemName`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyEntry {
    /// Name as written in `codeSystemName`
    pub name: &'static str,
    pub code_system: &'static str,
    pub system_uri: &'static str,
    pub value_set_base: &'static str,
}

pub const VOCABULARY_MAPPINGS: &[VocabularyEntry] = &[
    VocabularyEntry {
        name: "SNMCT",
        code_system: "SNOMED",
        system_uri: SNOMED_SYSTEM,
        value_set_base: VSAC_VALUE_SET_BASE,
    },
    VocabularyEntry {
        name: "RXNORM",
        code_system: "RXNORM",
        system_uri: RXNORM_SYSTEM,
        value_set_base: VSAC_VALUE_SET_BASE,
    },
    VocabularyEntry {
        name: "CPT4",
        code_system: "CPT",
        system_uri: "http://www.ama-assn.org/go/cpt",
        value_set_base: VSAC_VALUE_SET_BASE,
    },
    VocabularyEntry {
        name: "HCPCS",
        code_system: "CMS",
        system_uri: "https://www.cms.gov/Medicare/Coding/MedHCPCSGenInfo/index.html",
        value_set_base: VSAC_VALUE_SET_BASE,
    },
    VocabularyEntry {
        name: "LOINC",
        code_system: "LOINC",
        system_uri: LOINC_SYSTEM,
        value_set_base: VSAC_VALUE_SET_BASE,
    },
    VocabularyEntry {
        name: "ICD10-CM",
        code_system: "ICD10-CM",
        system_uri: "http://hl7.org/fhir/sid/icd-10",
        value_set_base: VSAC_VALUE_SET_BASE,
    },
    VocabularyEntry {
        name: "ICD9-CM",
        code_system: "ICD9-CM",
        system_uri: "http://hl7.org/fhir/sid/icd-9",
        value_set_base: VSAC_VALUE_SET_BASE,
    },
];

/// An encounter class in the v3 ActCode system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncounterClass {
    pub code: &'static str,
    pub display: &'static str,
}

const INPATIENT: EncounterClass = EncounterClass {
    code: "IMP",
    display: "inpatient encounter",
};

const EMERGENCY: EncounterClass = EncounterClass {
    code: "EMER",
    display: "emergency",
};

/// Clinical encounter code → encounter class
pub const ENCOUNTER_CLASS_MAPPINGS: &[(&str, EncounterClass)] = &[
    // Encounter Inpatient value set
    ("183452005", INPATIENT),
    ("32485007", INPATIENT),
    ("8715000", INPATIENT),
    // Observation Services value set
    ("448951000124107", INPATIENT),
    // Emergency Department Visit value set
    ("4525004", EMERGENCY),
];

/// A discharge disposition concept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DischargeDisposition {
    pub code: &'static str,
    pub display: &'static str,
    pub system: &'static str,
}

const fn disposition(code: &'static str, display: &'static str) -> DischargeDisposition {
    DischargeDisposition {
        code,
        display,
        system: DISCHARGE_DISPOSITION_SYSTEM,
    }
}

/// Clinical discharge code → discharge disposition
pub const DISCHARGE_DISPOSITION_MAPPINGS: &[(&str, DischargeDisposition)] = &[
    ("428371000124100", disposition("home", "Home")),
    ("428361000124107", disposition("hosp", "Hospice")),
    ("306689006", disposition("home", "Home")),
    ("428521000124106", disposition("rehab", "Rehabilitation")),
    (
        "434781000124105",
        disposition("other-hcf", "Other healthcare facility"),
    ),
];
