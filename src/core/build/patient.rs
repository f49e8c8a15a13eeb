//! Patient resource builder

use super::time::format_birth_date;
use crate::core::terminology::tables::{
    OMB_RACE_SYSTEM, QICORE_PATIENT_PROFILE, US_CORE_ETHNICITY_URL, US_CORE_RACE_URL,
};
use crate::domain::{CodedValue, Coding, Extension, HumanName, Meta, Patient, PatientRecord};

const NAME_USE: &str = "usual";

/// Builds a QI-Core Patient
///
/// Never fails. Absent source fields are omitted from the resource.
pub fn build(record: PatientRecord) -> Patient {
    let extension = [
        demographic_extension(US_CORE_RACE_URL, &record.race),
        demographic_extension(US_CORE_ETHNICITY_URL, &record.ethnicity),
    ]
    .into_iter()
    .flatten()
    .collect();

    Patient {
        resource_type: Patient::RESOURCE_TYPE.to_string(),
        birth_date: format_birth_date(record.birth_date.as_deref()),
        id: record.id,
        meta: Meta::with_profile(QICORE_PATIENT_PROFILE),
        active: true,
        gender: record.gender,
        name: vec![HumanName {
            use_: NAME_USE.to_string(),
            given: vec![record.name.given],
            family: record.name.family,
        }],
        extension,
    }
}

/// US Core race/ethnicity extension; `None` unless the source carried a code
fn demographic_extension(url: &str, coded: &CodedValue) -> Option<Extension> {
    let code = coded.code.as_deref()?;
    let text = coded.display.as_deref().unwrap_or(code);

    Some(Extension::complex(
        url,
        vec![
            Extension::coding(
                "ombCategory",
                Coding::new(Some(OMB_RACE_SYSTEM), Some(code), coded.display.as_deref()),
            ),
            Extension::string("text", text),
        ],
    ))
}
