//! Configuration schema types
//!
//! This module defines the configuration structure that maps to `qrda-fhir.toml`.

use serde::{Deserialize, Serialize};

/// Main QRDA-FHIR configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QrdaFhirConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Conversion input, output and concurrency
    pub conversion: ConversionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl QrdaFhirConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.conversion.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (convert but don't write output files)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Conversion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// QRDA document or directory of documents
    pub input_path: String,

    /// Root directory for converted resources
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Extension of documents picked up from a directory
    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    /// Documents converted concurrently (1-64)
    #[serde(default = "default_parallel_documents")]
    pub parallel_documents: usize,

    /// Pretty-print JSON output
    #[serde(default = "default_true")]
    pub pretty_json: bool,

    /// Keep converting remaining documents after a failure
    #[serde(default = "default_true")]
    pub continue_on_error: bool,
}

impl ConversionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.input_path.trim().is_empty() {
            return Err("conversion.input_path cannot be empty".to_string());
        }

        if self.output_dir.trim().is_empty() {
            return Err("conversion.output_dir cannot be empty".to_string());
        }

        if self.file_extension.trim_start_matches('.').trim().is_empty() {
            return Err("conversion.file_extension cannot be empty".to_string());
        }

        if self.parallel_documents == 0 || self.parallel_documents > 64 {
            return Err(format!(
                "conversion.parallel_documents must be between 1 and 64, got {}",
                self.parallel_documents
            ));
        }

        Ok(())
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_dir: default_output_dir(),
            file_extension: default_file_extension(),
            parallel_documents: default_parallel_documents(),
            pretty_json: true,
            continue_on_error: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log file rotation (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_input_path() -> String {
    "input".to_string()
}

fn default_output_dir() -> String {
    "output".to_string()
}

fn default_file_extension() -> String {
    "xml".to_string()
}

fn default_parallel_documents() -> usize {
    8
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_conversion_config_validation() {
        let mut config = ConversionConfig::default();
        assert!(config.validate().is_ok());

        config.parallel_documents = 0;
        assert!(config.validate().is_err());

        config.parallel_documents = 65;
        assert!(config.validate().is_err());

        config.parallel_documents = 4;
        config.input_path = "  ".to_string();
        assert!(config.validate().is_err());

        config.input_path = "input".to_string();
        config.file_extension = ".".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert!(!config.local_enabled);
        assert_eq!(config.local_path, "./logs");
        assert_eq!(config.local_rotation, "daily");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_config_rotation_validation() {
        let mut config = LoggingConfig::default();
        config.local_rotation = "size".to_string();
        assert!(config.validate().is_err());

        config.local_rotation = "hourly".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let config: QrdaFhirConfig = toml::from_str(
            r#"
[conversion]
input_path = "/data/qrda"
"#,
        )
        .unwrap();

        assert_eq!(config.application.log_level, "info");
        assert!(!config.application.dry_run);
        assert_eq!(config.conversion.input_path, "/data/qrda");
        assert_eq!(config.conversion.output_dir, "output");
        assert_eq!(config.conversion.file_extension, "xml");
        assert_eq!(config.conversion.parallel_documents, 8);
        assert!(config.conversion.pretty_json);
        assert!(config.conversion.continue_on_error);
        assert!(!config.logging.local_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_log_level(), "info");
        assert_eq!(default_output_dir(), "output");
        assert_eq!(default_parallel_documents(), 8);
        assert_eq!(default_local_rotation(), "daily");
    }
}
