//! I/O collaborators for the batch converter.
//!
//! - [`source`] - Discovers QRDA documents on disk
//! - [`sink`] - Writes converted resources (filesystem or dry run)
//!
//! Adapters carry no conversion logic. The sink is a trait so the batch
//! coordinator can be driven against a dry run or a test double.
//!
//! ```rust,no_run
//! use qrda_fhir::adapters::sink::{FileSystemSink, ResourceSink};
//! use qrda_fhir::adapters::source::DocumentSource;
//! use qrda_fhir::core::convert::convert_document;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let sink = FileSystemSink::new("output", true);
//! for origin in DocumentSource::new("input", "xml").discover()? {
//!     let resources = convert_document(&std::fs::read(&origin.path)?)?;
//!     sink.write(&origin, &resources).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod sink;
pub mod source;

pub use sink::{DryRunSink, FileSystemSink, ResourceSink};
pub use source::{DocumentOrigin, DocumentSource};
