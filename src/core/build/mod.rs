//! Resource builders
//!
//! Turn extracted records into QI-Core shaped FHIR resources. The Patient
//! builder never fails; Encounter and Medication builders fail only on a
//! present but malformed timestamp.

pub mod encounter;
pub mod medication;
pub mod patient;
pub mod time;
