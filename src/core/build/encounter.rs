//! Encounter resource builder

use super::time::parse_timestamp;
use crate::core::terminology::tables::QICORE_ENCOUNTER_PROFILE;
use crate::core::terminology::{map_code_system, map_discharge_disposition, map_encounter_class};
use crate::domain::{
    CodeableConcept, CodedValue, Coding, Encounter, EncounterRecord, Hospitalization, Meta,
    Patient, Period, Reference, ResourceId, Result,
};

/// Builds a QI-Core Encounter for the patient `patient_id`
///
/// The record's status is used as is; an absent status becomes `unknown`.
///
/// # Errors
///
/// Fails with [`crate::domain::QrdaError::MalformedTimestamp`] when either
/// period bound is present but unparseable.
pub fn build(record: EncounterRecord, patient_id: &ResourceId) -> Result<Encounter> {
    let period = Period {
        start: parse_timestamp("encounter.period.start", record.low_time.as_deref())?,
        end: parse_timestamp("encounter.period.end", record.high_time.as_deref())?,
    };

    let hospitalization = map_discharge_disposition(record.discharge_disposition.code.as_deref())
        .map(|coding| Hospitalization {
            discharge_disposition: CodeableConcept::single(coding),
        });

    Ok(Encounter {
        resource_type: Encounter::RESOURCE_TYPE.to_string(),
        id: ResourceId::from_source_or_generate(record.encounter_id.as_deref()),
        meta: Meta::with_profile(QICORE_ENCOUNTER_PROFILE),
        status: record.status.unwrap_or_default(),
        class: map_encounter_class(record.code.code.as_deref()),
        type_: encounter_type(&record.code),
        subject: Reference {
            reference: patient_id.reference(Patient::RESOURCE_TYPE),
        },
        period: (!period.is_empty()).then_some(period),
        hospitalization,
    })
}

/// Empty without a code, otherwise one coding labelled with the source code system name
fn encounter_type(code: &CodedValue) -> Vec<CodeableConcept> {
    let Some(value) = code.code.as_deref() else {
        return Vec::new();
    };

    let system = code.code_system.as_deref().map(map_code_system);
    vec![CodeableConcept::single(Coding::new(
        system,
        Some(value),
        code.code_system_name.as_deref(),
    ))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::terminology::tables::{ACT_CODE_SYSTEM, SNOMED_SYSTEM};
    use crate::domain::{QrdaError, StatusCode};
    use serde_json::json;
    use uuid::Uuid;

    fn patient_id() -> ResourceId {
        ResourceId::new("12345").unwrap()
    }

    fn inpatient() -> EncounterRecord {
        EncounterRecord {
            encounter_id: Some("enc-1".to_string()),
            status: Some(StatusCode::Finished),
            low_time: Some("20240101080000".to_string()),
            high_time: Some("20240101100000".to_string()),
            code: CodedValue {
                code: Some("183452005".to_string()),
                code_system: Some("2.16.840.1.113883.6.96".to_string()),
                code_system_name: Some("SNOMEDCT".to_string()),
                display: None,
            },
            discharge_disposition: CodedValue::default(),
        }
    }

    #[test]
    fn test_build_inpatient_encounter() {
        let encounter = build(inpatient(), &patient_id()).unwrap();

        assert_eq!(encounter.resource_type, "Encounter");
        assert_eq!(encounter.id.as_str(), "enc-1");
        assert_eq!(encounter.status, StatusCode::Finished);
        assert_eq!(encounter.subject.reference, "Patient/12345");
        assert_eq!(encounter.meta.profile, vec![QICORE_ENCOUNTER_PROFILE.to_string()]);

        let period = encounter.period.unwrap();
        assert_eq!(period.start.as_deref(), Some("2024-01-01T08:00:00.000+00:00"));
        assert_eq!(period.end.as_deref(), Some("2024-01-01T10:00:00.000+00:00"));

        let class = encounter.class.unwrap();
        assert_eq!(class.code.as_deref(), Some("IMP"));
        assert_eq!(class.display.as_deref(), Some("inpatient encounter"));
        assert_eq!(class.system.as_deref(), Some(ACT_CODE_SYSTEM));

        assert_eq!(
            encounter.type_,
            vec![CodeableConcept::single(Coding::new(
                Some(SNOMED_SYSTEM),
                Some("183452005"),
                Some("SNOMEDCT"),
            ))]
        );
        assert!(encounter.hospitalization.is_none());
    }

    #[test]
    fn test_unknown_code_system_passes_through() {
        let record = EncounterRecord {
            code: CodedValue {
                code: Some("999999".to_string()),
                code_system: Some("unknown-system".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let encounter = build(record, &patient_id()).unwrap();

        assert_eq!(
            encounter.type_[0].coding[0].system.as_deref(),
            Some("unknown-system")
        );
        assert!(encounter.class.is_none());
    }

    #[test]
    fn test_defaults_for_bare_record() {
        let encounter = build(EncounterRecord::default(), &patient_id()).unwrap();

        assert!(Uuid::parse_str(encounter.id.as_str()).is_ok());
        assert_eq!(encounter.status, StatusCode::Unknown);
        assert!(encounter.type_.is_empty());
        assert!(encounter.period.is_none());
        assert!(encounter.class.is_none());

        let json = serde_json::to_value(&encounter).unwrap();
        assert_eq!(json["status"], "unknown");
        assert_eq!(json["type"], json!([]));
        assert!(json.get("period").is_none());
        assert!(json.get("class").is_none());
    }

    #[test]
    fn test_period_bounds_are_independent() {
        let record = EncounterRecord {
            high_time: Some("20240101100000".to_string()),
            ..Default::default()
        };
        let encounter = build(record, &patient_id()).unwrap();

        let json = serde_json::to_value(&encounter).unwrap();
        assert_eq!(json["period"], json!({"end": "2024-01-01T10:00:00.000+00:00"}));
    }

    #[test]
    fn test_malformed_timestamp_fails() {
        let mut record = inpatient();
        record.high_time = Some("2024-01-01".to_string());

        let err = build(record, &patient_id()).unwrap_err();
        assert!(matches!(
            err,
            QrdaError::MalformedTimestamp { field: "encounter.period.end", .. }
        ));
    }

    #[test]
    fn test_discharge_disposition_mapped() {
        let mut record = inpatient();
        record.discharge_disposition.code = Some("428361000124107".to_string());

        let encounter = build(record, &patient_id()).unwrap();
        let json = serde_json::to_value(&encounter).unwrap();
        assert_eq!(
            json["hospitalization"]["dischargeDisposition"]["coding"][0]["code"],
            "hosp"
        );
    }

    #[test]
    fn test_unmapped_discharge_disposition_omitted() {
        let mut record = inpatient();
        record.discharge_disposition.code = Some("000000".to_string());

        let encounter = build(record, &patient_id()).unwrap();
        assert!(encounter.hospitalization.is_none());
    }
}
