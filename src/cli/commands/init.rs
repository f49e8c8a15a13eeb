//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "qrda-fhir.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing QRDA-FHIR configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Point conversion.input_path at a QRDA file or directory");
                println!("  3. Validate configuration: qrda-fhir validate-config");
                println!("  4. Run conversion: qrda-fhir convert");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# QRDA-FHIR Configuration File
# QRDA to FHIR conversion tool

[application]
log_level = "info"
dry_run = false

[conversion]
input_path = "input"
output_dir = "output"
file_extension = "xml"
parallel_documents = 8
pretty_json = true
continue_on_error = true

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# QRDA-FHIR Configuration File
# QRDA to FHIR conversion tool
#
# This file contains all configuration options with examples and explanations.
#
# Values may reference environment variables with ${VAR_NAME}. Any setting can
# also be overridden with QRDA_FHIR_<SECTION>_<KEY>, for example
# QRDA_FHIR_CONVERSION_INPUT_PATH.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Dry run mode (convert but don't write output files)
dry_run = false

# ============================================================================
# Conversion Settings
# ============================================================================
[conversion]
# A single QRDA document, or a directory searched recursively
input_path = "${QRDA_INPUT_DIR}"

# Each document gets its own directory here, named after the document:
#   <output_dir>/<document>/patient_<id>.json
#   <output_dir>/<document>/encounter_<id>.json
#   <output_dir>/<document>/medication_<id>.json
output_dir = "output"

# Extension of documents picked up from a directory (case-insensitive)
file_extension = "xml"

# Number of documents converted concurrently (1-64)
parallel_documents = 8

# Pretty-print JSON output
pretty_json = true

# Keep converting remaining documents after a failure
continue_on_error = true

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable JSON file logging
local_enabled = false

# Directory for log files
local_path = "./logs"

# Log rotation (daily, hourly, never)
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: "qrda-fhir.toml".to_string(),
            with_examples: false,
            force: false,
        };

        assert_eq!(args.output, "qrda-fhir.toml");
        assert!(!args.with_examples);
        assert!(!args.force);
    }

    #[test]
    fn test_generate_minimal_config_is_valid() {
        let config = parse_config(&InitArgs::generate_minimal_config()).unwrap();
        assert_eq!(config.conversion.input_path, "input");
        assert_eq!(config.conversion.parallel_documents, 8);
    }

    #[test]
    fn test_generate_config_with_examples() {
        let config = InitArgs::generate_config_with_examples();
        assert!(config.contains("# QRDA-FHIR Configuration File"));
        assert!(config.contains("[conversion]"));
        assert!(config.contains("continue_on_error"));
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("qrda-fhir.toml");
        fs::write(&path, "existing").unwrap();

        let args = InitArgs {
            output: path.display().to_string(),
            with_examples: false,
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing");

        let args = InitArgs { force: true, ..args };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(fs::read_to_string(&path).unwrap().contains("[conversion]"));
    }
}
