//! Batch conversion and reporting
//!
//! - Concurrent conversion of every discovered document
//! - Per-document failure isolation
//! - Summary and reporting

pub mod coordinator;
pub mod summary;

pub use coordinator::BatchCoordinator;
pub use summary::BatchSummary;
