//! Batch coordinator - converts every document found at the input path
//!
//! Documents are independent. Each one is read and converted on the blocking
//! pool, then handed to the sink; up to `parallel_documents` run at once. A
//! failing document is recorded in the summary and never affects the output
//! of any other document.

use super::summary::BatchSummary;
use crate::adapters::sink::ResourceSink;
use crate::adapters::source::{DocumentOrigin, DocumentSource};
use crate::config::ConversionConfig;
use crate::core::convert::convert_document;
use crate::domain::{DocumentFailure, QrdaError, ResourceSet, Result};
use crate::{log_batch_progress, log_document_converted, log_document_start, log_error_with_context};
use futures::stream::{self, StreamExt};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;

/// Result of one document
enum DocumentOutcome {
    Converted {
        resources: ResourceSet,
        written: usize,
    },
    Failed(DocumentFailure),
}

/// Batch coordinator
pub struct BatchCoordinator {
    config: ConversionConfig,
    sink: Arc<dyn ResourceSink>,
    shutdown_signal: watch::Receiver<bool>,
}

impl BatchCoordinator {
    /// Create a new batch coordinator
    pub fn new(
        config: ConversionConfig,
        sink: Arc<dyn ResourceSink>,
        shutdown_signal: watch::Receiver<bool>,
    ) -> Self {
        Self {
            config,
            sink,
            shutdown_signal,
        }
    }

    /// Convert all documents
    ///
    /// Once a shutdown signal is seen no new documents are started; documents
    /// already in flight finish and the summary is marked interrupted. With
    /// `continue_on_error = false` the first failure stops scheduling the same
    /// way.
    ///
    /// # Errors
    ///
    /// Only discovery failures are returned as errors. Per-document failures
    /// are recorded in [`BatchSummary::failures`].
    pub async fn run(&self) -> Result<BatchSummary> {
        let start_time = Instant::now();
        let mut summary = BatchSummary::new();

        let source = DocumentSource::new(&self.config.input_path, &self.config.file_extension);
        let documents = source.discover()?;
        summary.total_documents = documents.len();

        tracing::info!(
            input = %self.config.input_path,
            documents = documents.len(),
            parallel = self.config.parallel_documents,
            sink = self.sink.name(),
            "Starting batch conversion"
        );

        if documents.is_empty() {
            tracing::warn!(input = %self.config.input_path, "No documents to convert");
            return Ok(summary.with_duration(start_time.elapsed()));
        }

        let total = documents.len();
        let halted = AtomicBool::new(false);

        let mut outcomes = stream::iter(documents)
            .take_while(|_| futures::future::ready(!self.should_stop(&halted)))
            .map(|origin| self.process(origin))
            .buffer_unordered(self.config.parallel_documents.max(1));

        let mut processed = 0usize;
        while let Some(outcome) = outcomes.next().await {
            processed += 1;
            match outcome {
                DocumentOutcome::Converted { resources, written } => {
                    summary.record_converted(&resources, written);
                }
                DocumentOutcome::Failed(failure) => {
                    summary.record_failure(failure);
                    if !self.config.continue_on_error {
                        tracing::warn!("Stopping batch after first failure");
                        halted.store(true, Ordering::Relaxed);
                    }
                }
            }
            log_batch_progress!(processed, total);
        }
        drop(outcomes);

        if self.shutdown_requested() && summary.skipped_documents() > 0 {
            tracing::info!(
                skipped = summary.skipped_documents(),
                "Batch interrupted by shutdown signal"
            );
            summary.interrupted = true;
        }

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        Ok(summary)
    }

    fn should_stop(&self, halted: &AtomicBool) -> bool {
        halted.load(Ordering::Relaxed) || self.shutdown_requested()
    }

    fn shutdown_requested(&self) -> bool {
        *self.shutdown_signal.borrow()
    }

    async fn process(&self, origin: DocumentOrigin) -> DocumentOutcome {
        let started = Instant::now();
        log_document_start!(origin.path);

        match self.convert_and_write(&origin).await {
            Ok((resources, written)) => {
                log_document_converted!(origin.path, written, started.elapsed());
                DocumentOutcome::Converted { resources, written }
            }
            Err(e) => {
                log_error_with_context!(e, origin.path.display());
                DocumentOutcome::Failed(DocumentFailure::new(&origin.path, &e))
            }
        }
    }

    async fn convert_and_write(&self, origin: &DocumentOrigin) -> Result<(ResourceSet, usize)> {
        let path = origin.path.clone();
        let resources = tokio::task::spawn_blocking(move || -> Result<ResourceSet> {
            let bytes = std::fs::read(&path).map_err(|e| {
                QrdaError::Io(format!("Failed to read {}: {e}", path.display()))
            })?;
            convert_document(&bytes)
        })
        .await
        .map_err(|e| QrdaError::Other(format!("Conversion task failed: {e}")))??;

        let written = self.sink.write(origin, &resources).await?;
        Ok((resources, written))
    }
}
