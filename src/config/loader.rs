//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::QrdaFhirConfig;
use crate::domain::errors::QrdaError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

const ENV_PLACEHOLDER: &str = r"\$\{([A-Z_][A-Z0-9_]*)\}";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into QrdaFhirConfig
/// 4. Applies environment variable overrides (QRDA_FHIR_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use qrda_fhir::config::loader::load_config;
///
/// let config = load_config("qrda-fhir.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<QrdaFhirConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(QrdaError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        QrdaError::Configuration(format!(
            "Failed to read configuration file {}: {e}",
            path.display()
        ))
    })?;

    parse_config(&contents)
}

/// Parses configuration from TOML text, with substitution, overrides and validation
///
/// # Errors
///
/// Same as [`load_config`], minus file access.
pub fn parse_config(contents: &str) -> Result<QrdaFhirConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: QrdaFhirConfig = toml::from_str(&contents)?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        QrdaError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(ENV_PLACEHOLDER)
        .map_err(|e| QrdaError::Configuration(format!("Invalid placeholder pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&cap[0], &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(QrdaError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using QRDA_FHIR_* prefix
///
/// Environment variables follow the pattern: QRDA_FHIR_<SECTION>_<KEY>
/// For example: QRDA_FHIR_CONVERSION_INPUT_PATH, QRDA_FHIR_APPLICATION_DRY_RUN
fn apply_env_overrides(config: &mut QrdaFhirConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("QRDA_FHIR_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("QRDA_FHIR_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Conversion overrides
    if let Ok(val) = std::env::var("QRDA_FHIR_CONVERSION_INPUT_PATH") {
        config.conversion.input_path = val;
    }
    if let Ok(val) = std::env::var("QRDA_FHIR_CONVERSION_OUTPUT_DIR") {
        config.conversion.output_dir = val;
    }
    if let Ok(val) = std::env::var("QRDA_FHIR_CONVERSION_FILE_EXTENSION") {
        config.conversion.file_extension = val;
    }
    if let Ok(val) = std::env::var("QRDA_FHIR_CONVERSION_PARALLEL_DOCUMENTS") {
        if let Ok(parallel) = val.parse() {
            config.conversion.parallel_documents = parallel;
        }
    }
    if let Ok(val) = std::env::var("QRDA_FHIR_CONVERSION_PRETTY_JSON") {
        config.conversion.pretty_json = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("QRDA_FHIR_CONVERSION_CONTINUE_ON_ERROR") {
        config.conversion.continue_on_error = val.parse().unwrap_or(true);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("QRDA_FHIR_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("QRDA_FHIR_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("QRDA_FHIR_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}
