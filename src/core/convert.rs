//! Document conversion orchestrator
//!
//! Builds Patient first, then Encounter and MedicationAdministration when their
//! sections are present, both referencing the Patient's id. There is no error
//! recovery here; the first failure fails the document.

use super::build;
use super::document::DocumentContext;
use super::extract::extract_document;
use crate::domain::{ExtractedDocument, ResourceSet, Result};

/// Assembles the resource set for one extracted document
///
/// # Errors
///
/// Propagates [`crate::domain::QrdaError::MalformedTimestamp`] from the
/// Encounter and Medication builders.
pub fn assemble(extracted: ExtractedDocument) -> Result<ResourceSet> {
    let patient = build::patient::build(extracted.patient);

    let encounter = extracted
        .encounter
        .map(|record| build::encounter::build(record, &patient.id))
        .transpose()?;

    let medication = extracted
        .medication
        .map(|record| build::medication::build(record, &patient.id))
        .transpose()?;

    Ok(ResourceSet {
        patient,
        encounter,
        medication,
    })
}

/// Converts raw document bytes into FHIR resources
///
/// # Examples
///
/// ```
/// use qrda_fhir::core::convert::convert_document;
///
/// let xml = br#"<ClinicalDocument xmlns="urn:hl7-org:v3">
///   <recordTarget><patientRole><id extension="12345"/></patientRole></recordTarget>
/// </ClinicalDocument>"#;
///
/// let resources = convert_document(xml).unwrap();
/// assert_eq!(resources.patient.id.as_str(), "12345");
/// assert!(resources.encounter.is_none());
/// ```
///
/// # Errors
///
/// Fails with [`crate::domain::QrdaError::MalformedDocument`] for input that
/// is not well-formed XML, or with
/// [`crate::domain::QrdaError::MalformedTimestamp`] for an unparseable period.
pub fn convert_document(bytes: &[u8]) -> Result<ResourceSet> {
    let ctx = DocumentContext::parse(bytes)?;
    let resources = assemble(extract_document(&ctx))?;

    tracing::debug!(
        patient_id = %resources.patient.id,
        encounter = resources.encounter.is_some(),
        medication = resources.medication.is_some(),
        "Assembled resource set"
    );

    Ok(resources)
}
