// qrda-fhir - QRDA to FHIR conversion tool
// Copyright (c) 2025 qrda-fhir Contributors
// Licensed under the MIT License

//! # QRDA-FHIR - QRDA to FHIR conversion
//!
//! QRDA-FHIR converts QRDA clinical-quality documents (CDA XML) into QI-Core
//! FHIR resources for quality-measure reporting.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Extracting** patient, encounter and medication facts from namespaced CDA XML
//! - **Mapping** codes, code systems and statuses against static terminology tables
//! - **Building** Patient, Encounter and MedicationAdministration resources
//! - **Batch converting** directories of documents with per-document failure isolation
//!
//! ## Architecture
//!
//! QRDA-FHIR follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (document queries, extraction, terminology, builders, batch)
//! - [`adapters`] - Filesystem document source and resource sinks
//! - [`domain`] - Records, FHIR resources, identifiers and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use qrda_fhir::core::convert::convert_document;
//!
//! let xml = br#"<ClinicalDocument xmlns="urn:hl7-org:v3">
//!   <recordTarget>
//!     <patientRole>
//!       <id extension="12345"/>
//!       <patient><administrativeGenderCode code="F"/></patient>
//!     </patientRole>
//!   </recordTarget>
//! </ClinicalDocument>"#;
//!
//! let resources = convert_document(xml)?;
//! assert_eq!(resources.patient.gender, "f");
//!
//! let json = serde_json::to_string_pretty(&resources.patient)?;
//! assert!(json.contains("\"resourceType\": \"Patient\""));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! QRDA-FHIR uses the [`domain::QrdaError`] type for all errors. Missing fields
//! and unmapped codes are never errors; only input that cannot be parsed fails
//! a document:
//!
//! ```rust
//! use qrda_fhir::core::convert::convert_document;
//! use qrda_fhir::domain::QrdaError;
//!
//! let err = convert_document(b"<ClinicalDocument>").unwrap_err();
//! assert!(matches!(err, QrdaError::MalformedDocument(_)));
//! ```
//!
//! ## Logging
//!
//! QRDA-FHIR uses structured logging with the `tracing` crate. Patient values
//! are only ever logged at `debug` or below.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
