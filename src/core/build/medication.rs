//! MedicationAdministration resource builder

use super::time::parse_timestamp;
use crate::core::terminology::tables::{
    DEFAULT_MEDICATION_CODE, DEFAULT_MEDICATION_STATUS, QICORE_MEDICATION_PROFILE, RXNORM_SYSTEM,
};
use crate::domain::{
    CodeableConcept, Coding, MedicationAdministration, MedicationRecord, Meta, Patient, Period,
    Reference, ResourceId, Result,
};

/// Builds a QI-Core MedicationAdministration for the patient `patient_id`
///
/// The id is always freshly generated and the status is always `completed`.
/// The effective period is omitted when both bounds are absent.
///
/// # Errors
///
/// Fails with [`crate::domain::QrdaError::MalformedTimestamp`] when either
/// bound is present but unparseable.
pub fn build(record: MedicationRecord, patient_id: &ResourceId) -> Result<MedicationAdministration> {
    let effective_period = Period {
        start: parse_timestamp(
            "medication.effectivePeriod.start",
            record.low_time.as_deref(),
        )?,
        end: parse_timestamp("medication.effectivePeriod.end", record.high_time.as_deref())?,
    };

    let code = record.code.code.as_deref().unwrap_or(DEFAULT_MEDICATION_CODE);
    let coding = Coding::new(
        Some(RXNORM_SYSTEM),
        Some(code),
        record.code.display.as_deref(),
    );

    Ok(MedicationAdministration {
        resource_type: MedicationAdministration::RESOURCE_TYPE.to_string(),
        id: ResourceId::generate(),
        meta: Meta::with_profile(QICORE_MEDICATION_PROFILE),
        status: DEFAULT_MEDICATION_STATUS.to_string(),
        subject: Reference {
            reference: patient_id.reference(Patient::RESOURCE_TYPE),
        },
        effective_period: (!effective_period.is_empty()).then_some(effective_period),
        medication_codeable_concept: CodeableConcept::single(coding),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CodedValue, QrdaError, StatusCode};
    use serde_json::json;

    fn patient_id() -> ResourceId {
        ResourceId::new("12345").unwrap()
    }

    #[test]
    fn test_build_medication() {
        let record = MedicationRecord {
            medication_id: Some("med-7".to_string()),
            low_time: Some("20240102090000".to_string()),
            high_time: Some("20240102093000".to_string()),
            status: Some(StatusCode::InProgress),
            code: CodedValue {
                code: Some("1191".to_string()),
                code_system: Some("2.16.840.1.113883.6.88".to_string()),
                code_system_name: Some("RxNorm".to_string()),
                display: Some("Aspirin".to_string()),
            },
        };
        let medication = build(record, &patient_id()).unwrap();

        assert_eq!(medication.resource_type, "MedicationAdministration");
        assert_ne!(medication.id.as_str(), "med-7");
        assert_eq!(medication.status, "completed");
        assert_eq!(medication.subject.reference, "Patient/12345");
        assert_eq!(
            medication.meta.profile,
            vec![QICORE_MEDICATION_PROFILE.to_string()]
        );

        let json = serde_json::to_value(&medication).unwrap();
        assert_eq!(
            json["effectivePeriod"],
            json!({
                "start": "2024-01-02T09:00:00.000+00:00",
                "end": "2024-01-02T09:30:00.000+00:00"
            })
        );
        assert_eq!(
            json["medicationCodeableConcept"],
            json!({"coding": [{"system": RXNORM_SYSTEM, "code": "1191", "display": "Aspirin"}]})
        );
    }

    #[test]
    fn test_defaults_for_bare_record() {
        let medication = build(MedicationRecord::default(), &patient_id()).unwrap();
        let json = serde_json::to_value(&medication).unwrap();

        assert!(json.get("effectivePeriod").is_none());
        assert_eq!(
            json["medicationCodeableConcept"]["coding"][0],
            json!({"system": RXNORM_SYSTEM, "code": "unknown"})
        );
    }

    #[test]
    fn test_single_bound_keeps_period() {
        let record = MedicationRecord {
            high_time: Some("20240102093000".to_string()),
            ..Default::default()
        };
        let medication = build(record, &patient_id()).unwrap();
        let period = medication.effective_period.unwrap();

        assert!(period.start.is_none());
        assert_eq!(period.end.as_deref(), Some("2024-01-02T09:30:00.000+00:00"));
    }

    #[test]
    fn test_ids_are_unique_per_build() {
        let first = build(MedicationRecord::default(), &patient_id()).unwrap();
        let second = build(MedicationRecord::default(), &patient_id()).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_malformed_timestamp_fails() {
        let record = MedicationRecord {
            low_time: Some("not-a-time".to_string()),
            ..Default::default()
        };
        let err = build(record, &patient_id()).unwrap_err();
        assert!(matches!(
            err,
            QrdaError::MalformedTimestamp { field: "medication.effectivePeriod.start", .. }
        ));
    }
}
