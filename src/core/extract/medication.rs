//! Medication administration extraction

use super::read_coded;
use crate::core::document::DocumentContext;
use crate::core::terminology::normalize_status;
use crate::domain::MedicationRecord;

const MEDICATION_SECTION: &str = "//entry/substanceAdministration";
const CONSUMABLE_CODE: &str = "consumable/manufacturedProduct/manufacturedMaterial/code";

/// Extracts the first substance administration entry, or `None` when absent
pub fn extract(ctx: &DocumentContext<'_>) -> Option<MedicationRecord> {
    let Some(administration) = ctx.at(MEDICATION_SECTION) else {
        tracing::debug!("No medication section");
        return None;
    };

    let record = MedicationRecord {
        medication_id: administration.attr("id", "extension"),
        low_time: administration.attr("effectiveTime/low", "value"),
        high_time: administration.attr("effectiveTime/high", "value"),
        status: Some(normalize_status(
            administration.attr("statusCode", "code").as_deref(),
        )),
        code: read_coded(administration.at(CONSUMABLE_CODE)),
    };

    tracing::debug!(
        medication_id = record.medication_id.as_deref(),
        code = record.code.code.as_deref(),
        has_low = record.low_time.is_some(),
        has_high = record.high_time.is_some(),
        "Extracted medication"
    );

    Some(record)
}
