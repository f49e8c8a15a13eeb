//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the QRDA-FHIR configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates as part of loading
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                println!();
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  Input: {}", config.conversion.input_path);
        println!("  Output: {}", config.conversion.output_dir);
        println!("  File Extension: {}", config.conversion.file_extension);
        println!(
            "  Parallel Documents: {}",
            config.conversion.parallel_documents
        );
        println!("  Pretty JSON: {}", config.conversion.pretty_json);
        println!(
            "  Continue On Error: {}",
            config.conversion.continue_on_error
        );
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();
        Ok(0)
    }
}
