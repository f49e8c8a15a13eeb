//! Configuration management for QRDA-FHIR.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Configuration files support:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `QRDA_FHIR_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use qrda_fhir::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("qrda-fhir.toml")?;
//!
//! println!("Input: {}", config.conversion.input_path);
//! println!("Output: {}", config.conversion.output_dir);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level and dry run
//! - [`ConversionConfig`] - Input, output, concurrency and error policy
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//! dry_run = false
//!
//! [conversion]
//! input_path = "${QRDA_INPUT_DIR}"
//! output_dir = "output"
//! file_extension = "xml"
//! parallel_documents = 8
//! pretty_json = true
//! continue_on_error = true
//!
//! [logging]
//! local_enabled = false
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, parse_config};
pub use schema::{ApplicationConfig, ConversionConfig, LoggingConfig, QrdaFhirConfig};
