//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Seed command arguments.
#[derive(Debug, Args)]
pub struct SeedCommand {
    /// Path to a JSON seed dataset; uses the built-in dataset when omitted
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Search command arguments.
#[derive(Debug, Args)]
pub struct SearchCommand {
    /// The search fragment (matches airport names and IATA codes)
    pub fragment: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Flights command arguments.
#[derive(Debug, Args)]
pub struct FlightsCommand {
    /// IATA code of the departure airport
    pub code: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Favorites listing arguments.
#[derive(Debug, Args)]
pub struct FavoritesCommand {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments naming a route by its ordered code pair.
#[derive(Debug, Args)]
pub struct RouteArgs {
    /// IATA code of the departure airport
    pub departure: String,

    /// IATA code of the destination airport
    pub destination: String,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_seed_command_debug() {
        let cmd = SeedCommand { file: None };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("file"));
    }

    #[test]
    fn test_search_command_debug() {
        let cmd = SearchCommand {
            fragment: "vie".to_string(),
            format: OutputFormat::Table,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("fragment"));
        assert!(debug_str.contains("vie"));
    }

    #[test]
    fn test_route_args_debug() {
        let args = RouteArgs {
            departure: "VIE".to_string(),
            destination: "FCO".to_string(),
        };
        let debug_str = format!("{args:?}");
        assert!(debug_str.contains("VIE"));
        assert!(debug_str.contains("FCO"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }

    #[test]
    fn test_output_format_clone() {
        let format = OutputFormat::Json;
        let cloned = format;
        assert_eq!(format, cloned);
    }
}
