//! CDA timestamp conversion
//!
//! CDA writes instants as `YYYYMMDDhhmmss` with an optional `±hhmm` offset.
//! FHIR instants are rendered in UTC with millisecond precision.

use crate::domain::{QrdaError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const CDA_DATETIME: &str = "%Y%m%d%H%M%S";
const CDA_DATETIME_WITH_OFFSET: &str = "%Y%m%d%H%M%S%z";
const FHIR_INSTANT: &str = "%Y-%m-%dT%H:%M:%S%.3f+00:00";

/// Converts an optional CDA timestamp into a FHIR instant
///
/// `None` passes through. A present value that does not parse fails with
/// [`QrdaError::MalformedTimestamp`] naming `field`.
///
/// # Examples
///
/// ```
/// use qrda_fhir::core::build::time::parse_timestamp;
///
/// let start = parse_timestamp("encounter.period.start", Some("20240101080000")).unwrap();
/// assert_eq!(start.as_deref(), Some("2024-01-01T08:00:00.000+00:00"));
///
/// assert!(parse_timestamp("encounter.period.end", Some("yesterday")).is_err());
/// ```
pub fn parse_timestamp(field: &'static str, raw: Option<&str>) -> Result<Option<String>> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let instant = to_utc(raw).ok_or_else(|| QrdaError::MalformedTimestamp {
        field,
        value: raw.to_string(),
    })?;

    Ok(Some(instant.format(FHIR_INSTANT).to_string()))
}

fn to_utc(raw: &str) -> Option<DateTime<Utc>> {
    let datetime = raw.get(..14)?;
    let offset = raw.get(14..)?;
    if !datetime.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if offset.is_empty() {
        let naive = NaiveDateTime::parse_from_str(datetime, CDA_DATETIME).ok()?;
        return Some(naive.and_utc());
    }

    let is_offset = offset.len() == 5
        && matches!(offset.as_bytes()[0], b'+' | b'-')
        && offset[1..].bytes().all(|b| b.is_ascii_digit());
    if !is_offset {
        return None;
    }

    DateTime::parse_from_str(raw, CDA_DATETIME_WITH_OFFSET)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Reformats a CDA birth time as a FHIR date
///
/// Only the first eight digits are used. Absent, short or impossible dates
/// yield `None` so the field is omitted.
pub fn format_birth_date(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    let digits = raw.get(..8)?;

    match NaiveDate::parse_from_str(digits, "%Y%m%d") {
        Ok(date) => Some(date.format("%Y-%m-%d").to_string()),
        Err(e) => {
            tracing::warn!(error = %e, "Unusable birth time, omitting birthDate");
            None
        }
    }
}
