//! Convert command implementation
//!
//! This module implements the `convert` command for converting QRDA documents
//! into FHIR resource files.

use crate::adapters::{DryRunSink, FileSystemSink, ResourceSink};
use crate::config::{load_config, QrdaFhirConfig};
use crate::core::batch::{BatchCoordinator, BatchSummary};
use clap::Args;
use std::sync::Arc;
use tokio::sync::watch;

/// Failures listed individually before the rest are summarized
const MAX_LISTED_FAILURES: usize = 10;

/// Arguments for the convert command
#[derive(Args, Debug, Default)]
pub struct ConvertArgs {
    /// Override the input document or directory
    #[arg(short, long)]
    pub input: Option<String>,

    /// Override the output directory
    #[arg(short, long)]
    pub output: Option<String>,

    /// Dry run mode - convert without writing any files
    #[arg(long)]
    pub dry_run: bool,

    /// Override the number of documents converted concurrently
    #[arg(long)]
    pub parallel: Option<usize>,

    /// Write compact instead of pretty-printed JSON
    #[arg(long)]
    pub compact: bool,
}

impl ConvertArgs {
    /// Execute the convert command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting convert command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        self.apply_overrides(&mut config);

        // Overrides can invalidate a loaded config
        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let dry_run = config.application.dry_run;
        let sink: Arc<dyn ResourceSink> = if dry_run {
            tracing::info!("Dry run mode enabled - no files will be written");
            println!("🔍 DRY RUN MODE - No files will be written");
            println!();
            Arc::new(DryRunSink::new())
        } else {
            Arc::new(FileSystemSink::new(
                &config.conversion.output_dir,
                config.conversion.pretty_json,
            ))
        };

        println!("🚀 Converting {}", config.conversion.input_path);
        println!();

        let coordinator = BatchCoordinator::new(config.conversion, sink, shutdown_signal);
        let summary = match coordinator.run().await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Conversion failed");
                eprintln!("Conversion failed: {e}");
                return Ok(5);
            }
        };

        print_summary(&summary, dry_run);
        Ok(exit_code(&summary))
    }

    fn apply_overrides(&self, config: &mut QrdaFhirConfig) {
        if let Some(input) = &self.input {
            tracing::info!(input = %input, "Overriding input path from CLI");
            config.conversion.input_path = input.clone();
        }

        if let Some(output) = &self.output {
            tracing::info!(output = %output, "Overriding output directory from CLI");
            config.conversion.output_dir = output.clone();
        }

        if let Some(parallel) = self.parallel {
            tracing::info!(parallel, "Overriding parallel documents from CLI");
            config.conversion.parallel_documents = parallel;
        }

        if self.compact {
            config.conversion.pretty_json = false;
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }
    }
}

fn print_summary(summary: &BatchSummary, dry_run: bool) {
    println!();
    println!("📊 Conversion Summary:");
    println!("  Documents: {}", summary.total_documents);
    println!("  Converted: {}", summary.converted_documents);
    println!("  Failed: {}", summary.failed_documents);
    if summary.skipped_documents() > 0 {
        println!("  Skipped: {}", summary.skipped_documents());
    }
    println!(
        "  Resources: {} patients, {} encounters, {} medication administrations",
        summary.patients, summary.encounters, summary.medications
    );
    if dry_run {
        println!("  Resources (not written): {}", summary.resources_written);
    } else {
        println!("  Resources written: {}", summary.resources_written);
    }
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!("  Success Rate: {:.2}%", summary.success_rate());
    println!();

    if !summary.failures.is_empty() {
        println!("⚠️  Failed documents:");
        for failure in summary.failures.iter().take(MAX_LISTED_FAILURES) {
            println!("  - {}", failure.path.display());
            println!("    Reason: {}", failure.message);
        }
        if summary.failures.len() > MAX_LISTED_FAILURES {
            println!(
                "  ... and {} more failures",
                summary.failures.len() - MAX_LISTED_FAILURES
            );
        }
        println!();
    }
}

/// Map a finished batch to the process exit code
pub fn exit_code(summary: &BatchSummary) -> i32 {
    if summary.interrupted {
        println!("⚠️  Conversion interrupted. Unprocessed documents were skipped.");
        tracing::info!("Conversion interrupted by user signal");
        130
    } else if summary.is_successful() {
        println!("✅ Conversion completed successfully!");
        0
    } else {
        println!("⚠️  Conversion completed with failures");
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DocumentFailure, QrdaError};

    #[test]
    fn test_convert_args_defaults() {
        let args = ConvertArgs::default();

        assert!(args.input.is_none());
        assert!(args.output.is_none());
        assert!(!args.dry_run);
        assert!(args.parallel.is_none());
        assert!(!args.compact);
    }

    #[test]
    fn test_apply_overrides() {
        let args = ConvertArgs {
            input: Some("/data/in".to_string()),
            output: Some("/data/out".to_string()),
            dry_run: true,
            parallel: Some(3),
            compact: true,
        };
        let mut config = QrdaFhirConfig::default();

        args.apply_overrides(&mut config);

        assert_eq!(config.conversion.input_path, "/data/in");
        assert_eq!(config.conversion.output_dir, "/data/out");
        assert_eq!(config.conversion.parallel_documents, 3);
        assert!(!config.conversion.pretty_json);
        assert!(config.application.dry_run);
    }

    #[test]
    fn test_exit_codes() {
        let mut summary = BatchSummary::new();
        summary.total_documents = 2;
        summary.converted_documents = 2;
        assert_eq!(exit_code(&summary), 0);

        summary.converted_documents = 1;
        let err = QrdaError::MalformedDocument("truncated".to_string());
        summary.record_failure(DocumentFailure::new("b.xml", &err));
        assert_eq!(exit_code(&summary), 1);

        summary.interrupted = true;
        assert_eq!(exit_code(&summary), 130);
    }

    #[tokio::test]
    async fn test_execute_missing_config_is_config_error() {
        let (_tx, rx) = watch::channel(false);
        let code = ConvertArgs::default()
            .execute("does-not-exist-qrda-fhir.toml", rx)
            .await
            .unwrap();
        assert_eq!(code, 2);
    }
}
