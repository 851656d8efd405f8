//! Command-line interface for flightsearch.
//!
//! This module provides the CLI structure for the `flisearch` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, FavoritesCommand, FlightsCommand, OutputFormat, RouteArgs, SearchCommand,
    SeedCommand, StatusCommand,
};

/// flisearch - Look up airports and track favorite routes
///
/// A local flight-search utility: find airports by name or IATA code,
/// list all outbound flights from an airport, and save favorite routes.
#[derive(Debug, Parser)]
#[command(name = "flisearch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Seed the airport database
    Seed(SeedCommand),

    /// Search airports by name or IATA code fragment
    Search(SearchCommand),

    /// List all outbound flights from a departure airport
    Flights(FlightsCommand),

    /// List saved favorite routes
    Favorites(FavoritesCommand),

    /// Save a route as a favorite
    Favorite(RouteArgs),

    /// Remove a saved favorite route
    Unfavorite(RouteArgs),

    /// Show database status
    Status(StatusCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
