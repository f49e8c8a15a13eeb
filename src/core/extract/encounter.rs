//! Encounter extraction

use super::read_coded;
use crate::core::document::DocumentContext;
use crate::core::terminology::normalize_status;
use crate::domain::EncounterRecord;

const ENCOUNTER_SECTION: &str = "//entry/encounter";

/// Extracts the first encounter entry, or `None` when the document has none
///
/// The status is normalized here, exactly once; builders never re-normalize.
pub fn extract(ctx: &DocumentContext<'_>) -> Option<EncounterRecord> {
    let Some(encounter) = ctx.at(ENCOUNTER_SECTION) else {
        tracing::debug!("No encounter section");
        return None;
    };

    let status = normalize_status(encounter.attr("statusCode", "code").as_deref());

    let record = EncounterRecord {
        encounter_id: encounter.attr("id", "extension"),
        status: Some(status),
        low_time: encounter.attr("effectiveTime/low", "value"),
        high_time: encounter.attr("effectiveTime/high", "value"),
        code: read_coded(encounter.at("code")),
        discharge_disposition: read_coded(encounter.at("sdtc:dischargeDispositionCode")),
    };

    tracing::debug!(
        encounter_id = record.encounter_id.as_deref(),
        status = %status,
        code = record.code.code.as_deref(),
        has_low = record.low_time.is_some(),
        has_high = record.high_time.is_some(),
        "Extracted encounter"
    );

    Some(record)
}
