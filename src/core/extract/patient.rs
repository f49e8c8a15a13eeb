//! Patient demographics extraction

use super::read_coded;
use crate::core::document::DocumentContext;
use crate::domain::{PatientRecord, PersonName, ResourceId};

const UNKNOWN_GENDER: &str = "unknown";

/// Extracts the patient record
///
/// Always returns a record. The id falls back to a generated UUID and the
/// gender to `"unknown"`.
pub fn extract(ctx: &DocumentContext<'_>) -> PatientRecord {
    let source_id = ctx.attr("//patientRole/id", "extension");
    let id = ResourceId::from_source_or_generate(source_id.as_deref());

    let gender = ctx
        .attr("//administrativeGenderCode", "code")
        .map(|g| g.to_lowercase())
        .unwrap_or_else(|| UNKNOWN_GENDER.to_string());

    let record = PatientRecord {
        id,
        birth_date: ctx.attr("//birthTime", "value"),
        gender,
        name: PersonName {
            given: ctx.text("//patient/name/given"),
            family: ctx.text("//patient/name/family"),
        },
        race: read_coded(ctx.at("//raceCode")),
        ethnicity: read_coded(ctx.at("//ethnicGroupCode")),
    };

    tracing::debug!(
        source_id = source_id.is_some(),
        birth_date = record.birth_date.is_some(),
        race = record.race.has_code(),
        ethnicity = record.ethnicity.has_code(),
        "Extracted patient"
    );

    record
}
