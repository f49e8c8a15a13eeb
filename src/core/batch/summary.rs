//! Batch summary and reporting
//!
//! This module defines structures for tracking and reporting batch results.

use crate::domain::{DocumentFailure, ResourceSet};
use std::time::Duration;

/// Summary of a batch conversion
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    /// Documents discovered at the input path
    pub total_documents: usize,

    /// Documents converted and written
    pub converted_documents: usize,

    /// Documents that failed
    pub failed_documents: usize,

    /// Patient resources produced
    pub patients: usize,

    /// Encounter resources produced
    pub encounters: usize,

    /// MedicationAdministration resources produced
    pub medications: usize,

    /// Resources handed to the sink and accepted
    pub resources_written: usize,

    /// Duration of the batch
    pub duration: Duration,

    /// One entry per failed document
    pub failures: Vec<DocumentFailure>,

    /// Whether the batch stopped early on a shutdown signal
    pub interrupted: bool,
}

impl BatchSummary {
    /// Create a new empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a converted document
    pub fn record_converted(&mut self, resources: &ResourceSet, written: usize) {
        self.converted_documents += 1;
        self.patients += 1;
        self.encounters += usize::from(resources.encounter.is_some());
        self.medications += usize::from(resources.medication.is_some());
        self.resources_written += written;
    }

    /// Record a failed document
    pub fn record_failure(&mut self, failure: DocumentFailure) {
        self.failed_documents += 1;
        self.failures.push(failure);
    }

    /// Documents that were discovered but never processed
    pub fn skipped_documents(&self) -> usize {
        self.total_documents
            .saturating_sub(self.converted_documents + self.failed_documents)
    }

    /// Check if every discovered document converted
    pub fn is_successful(&self) -> bool {
        self.failed_documents == 0 && self.skipped_documents() == 0 && !self.interrupted
    }

    /// Get success rate as a percentage of processed documents
    pub fn success_rate(&self) -> f64 {
        let processed = self.converted_documents + self.failed_documents;
        if processed == 0 {
            return 100.0;
        }
        (self.converted_documents as f64 / processed as f64) * 100.0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total = self.total_documents,
            converted = self.converted_documents,
            failed = self.failed_documents,
            skipped = self.skipped_documents(),
            patients = self.patients,
            encounters = self.encounters,
            medications = self.medications,
            duration_ms = self.duration.as_millis() as u64,
            success_rate = format!("{:.2}%", self.success_rate()),
            "Batch completed"
        );

        if !self.failures.is_empty() {
            tracing::warn!(
                failure_count = self.failures.len(),
                "Batch completed with failures"
            );
            for failure in &self.failures {
                tracing::warn!(
                    document = %failure.path.display(),
                    document_error = failure.document_error,
                    message = %failure.message,
                    "Document failed"
                );
            }
        }
    }
}
