//! Core business logic for QRDA-FHIR.
//!
//! This module contains the conversion pipeline and its batch orchestration.
//!
//! # Modules
//!
//! - [`document`] - Parsed document with namespace-aware path lookups
//! - [`extract`] - Field extractors producing plain records
//! - [`terminology`] - Static terminology tables and mapping functions
//! - [`build`] - FHIR resource builders
//! - [`convert`] - Single document conversion
//! - [`batch`] - Concurrent conversion of many documents
//!
//! # Conversion Workflow
//!
//! 1. **Parse**: Wrap the XML bytes in a [`document::DocumentContext`]
//! 2. **Extract**: Pull patient, encounter and medication records
//! 3. **Map**: Normalize statuses and codes against the terminology tables
//! 4. **Build**: Shape Patient, Encounter and MedicationAdministration
//! 5. **Write**: Hand the resource set to a sink (batch only)
//!
//! # Example
//!
//! ```rust,no_run
//! use qrda_fhir::adapters::FileSystemSink;
//! use qrda_fhir::config::load_config;
//! use qrda_fhir::core::batch::BatchCoordinator;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("qrda-fhir.toml")?;
//!
//! // Create shutdown signal
//! let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//!
//! let sink = Arc::new(FileSystemSink::new(&config.conversion.output_dir, true));
//! let coordinator = BatchCoordinator::new(config.conversion, sink, shutdown_rx);
//!
//! let summary = coordinator.run().await?;
//!
//! println!("Converted: {}", summary.converted_documents);
//! println!("Failed: {}", summary.failed_documents);
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod build;
pub mod convert;
pub mod document;
pub mod extract;
pub mod terminology;
