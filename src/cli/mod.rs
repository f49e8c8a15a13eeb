//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for QRDA-FHIR using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// QRDA-FHIR - QRDA to FHIR conversion tool
#[derive(Parser, Debug)]
#[command(name = "qrda-fhir")]
#[command(version, about, long_about = None)]
#[command(author = "qrda-fhir Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "qrda-fhir.toml", env = "QRDA_FHIR_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "QRDA_FHIR_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert QRDA documents to FHIR resources
    Convert(commands::convert::ConvertArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// Look up built-in terminology mappings
    Terminology(commands::terminology::TerminologyArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_convert() {
        let cli = Cli::parse_from(["qrda-fhir", "convert"]);
        assert_eq!(cli.config, "qrda-fhir.toml");
        assert!(matches!(cli.command, Commands::Convert(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["qrda-fhir", "--config", "custom.toml", "convert"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["qrda-fhir", "--log-level", "debug", "convert"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_convert_overrides() {
        let cli = Cli::parse_from([
            "qrda-fhir",
            "convert",
            "--input",
            "in",
            "--output",
            "out",
            "--parallel",
            "2",
            "--dry-run",
        ]);
        let Commands::Convert(args) = cli.command else {
            panic!("expected convert command");
        };
        assert_eq!(args.input.as_deref(), Some("in"));
        assert_eq!(args.output.as_deref(), Some("out"));
        assert_eq!(args.parallel, Some(2));
        assert!(args.dry_run);
        assert!(!args.compact);
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["qrda-fhir", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["qrda-fhir", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn test_cli_parse_terminology() {
        let cli = Cli::parse_from(["qrda-fhir", "terminology", "SNMCT", "--json"]);
        let Commands::Terminology(args) = cli.command else {
            panic!("expected terminology command");
        };
        assert_eq!(args.term, "SNMCT");
        assert!(args.json);
    }
}
