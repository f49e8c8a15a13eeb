//! Domain models and types for QRDA-FHIR.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Identifiers** ([`ResourceId`])
//! - **Extracted records** ([`PatientRecord`], [`EncounterRecord`], [`MedicationRecord`])
//! - **FHIR resources** ([`Patient`], [`Encounter`], [`MedicationAdministration`], [`ResourceSet`])
//! - **Error types** ([`QrdaError`], [`DocumentFailure`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, QrdaError>`]:
//!
//! ```rust
//! use qrda_fhir::domain::Result;
//!
//! fn example(xml: &[u8]) -> Result<()> {
//!     let resources = qrda_fhir::core::convert::convert_document(xml)?;
//!     println!("patient {}", resources.patient.id);
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod fhir;
pub mod ids;
pub mod records;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{DocumentFailure, QrdaError};
pub use fhir::{
    CodeableConcept, Coding, Encounter, Extension, HumanName, Hospitalization,
    MedicationAdministration, Meta, Patient, Period, Reference, ResourceRef, ResourceSet,
};
pub use ids::ResourceId;
pub use records::{
    CodedValue, EncounterRecord, ExtractedDocument, MedicationRecord, PatientRecord, PersonName,
    StatusCode,
};
pub use result::Result;
