//! `flisearch` - CLI for flightsearch
//!
//! This binary provides the command-line interface for seeding the airport
//! database, searching airports, listing outbound flights, and managing
//! favorite routes.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::sync::Arc;

use anyhow::bail;
use clap::Parser;

use flightsearch::cli::{
    Cli, Command, ConfigCommand, FavoritesCommand, FlightsCommand, OutputFormat, RouteArgs,
    SearchCommand, SeedCommand, StatusCommand,
};
use flightsearch::model::{Airport, FlightDetail};
use flightsearch::store::{FavoriteStore, PreferenceStore};
use flightsearch::{init_logging, seed, Config, SearchSession, Storage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    match cli.command {
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
        command => {
            let storage = Storage::open(config.database_path())?;
            match command {
                Command::Seed(cmd) => handle_seed(&storage, &config, &cmd),
                Command::Search(cmd) => handle_search(storage, &cmd).await,
                Command::Flights(cmd) => handle_flights(storage, &cmd).await,
                Command::Favorites(cmd) => handle_favorites(storage, &cmd).await,
                Command::Favorite(route) => handle_favorite(&storage, &route).await,
                Command::Unfavorite(route) => handle_unfavorite(&storage, &route).await,
                Command::Status(cmd) => handle_status(&storage, &cmd).await,
                Command::Config(_) => unreachable!("handled above"),
            }
        }
    }
}

fn handle_seed(storage: &Storage, config: &Config, cmd: &SeedCommand) -> anyhow::Result<()> {
    let dataset = match cmd.file.as_ref().or(config.seed.dataset_path.as_ref()) {
        Some(path) => seed::load_dataset(path)?,
        None => seed::default_dataset(),
    };

    let inserted = seed::seed_storage(storage, &dataset)?;
    println!(
        "Seeded {inserted} airports ({} already present).",
        dataset.len() - inserted
    );
    Ok(())
}

async fn handle_search(storage: Storage, cmd: &SearchCommand) -> anyhow::Result<()> {
    let session = SearchSession::new(Arc::new(storage));
    session.set_search_text(&cmd.fragment).await;

    let state = session.snapshot();
    if let Some(message) = state.error_message {
        bail!(message);
    }

    match cmd.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&state.autocomplete)?);
        }
        OutputFormat::Plain => {
            for entry in &state.autocomplete {
                println!("{} {}", entry.iata_code, entry.airport_name);
            }
        }
        OutputFormat::Table => {
            if state.autocomplete.is_empty() {
                println!("No airports match \"{}\".", cmd.fragment);
            } else {
                println!("{:<6} NAME", "CODE");
                for entry in &state.autocomplete {
                    println!("{:<6} {}", entry.iata_code, entry.airport_name);
                }
            }
        }
    }
    Ok(())
}

async fn handle_flights(storage: Storage, cmd: &FlightsCommand) -> anyhow::Result<()> {
    let session = SearchSession::new(Arc::new(storage));
    session.select_departure(&cmd.code).await;

    let state = session.snapshot();
    if let Some(message) = state.error_message {
        bail!(message);
    }

    match cmd.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&state.flights)?);
        }
        OutputFormat::Plain => {
            for flight in &state.flights {
                println!(
                    "{} -> {}{}",
                    flight.departure.iata_code,
                    flight.arrival.iata_code,
                    if flight.is_favorite { " *" } else { "" }
                );
            }
        }
        OutputFormat::Table => {
            print_flight_table(&state.flights);
        }
    }
    Ok(())
}

async fn handle_favorites(storage: Storage, cmd: &FavoritesCommand) -> anyhow::Result<()> {
    let session = SearchSession::new(Arc::new(storage));
    session.start().await;

    let state = session.snapshot();
    if let Some(message) = state.error_message {
        bail!(message);
    }

    match cmd.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&state.favorite_routes)?);
        }
        OutputFormat::Plain => {
            for flight in &state.favorite_routes {
                println!(
                    "{} -> {}",
                    flight.departure.iata_code, flight.arrival.iata_code
                );
            }
        }
        OutputFormat::Table => {
            if state.favorite_routes.is_empty() {
                println!("No favorite routes saved.");
            } else {
                print_flight_table(&state.favorite_routes);
            }
        }
    }
    Ok(())
}

async fn handle_favorite(storage: &Storage, route: &RouteArgs) -> anyhow::Result<()> {
    let favorite = storage
        .insert_favorite(&route.departure, &route.destination)
        .await?;
    println!(
        "Saved favorite route {} -> {}.",
        favorite.departure_code, favorite.destination_code
    );
    Ok(())
}

async fn handle_unfavorite(storage: &Storage, route: &RouteArgs) -> anyhow::Result<()> {
    storage
        .delete_favorite(&route.departure, &route.destination)
        .await?;
    println!(
        "Removed favorite route {} -> {}.",
        route.departure.to_uppercase(),
        route.destination.to_uppercase()
    );
    Ok(())
}

async fn handle_status(storage: &Storage, cmd: &StatusCommand) -> anyhow::Result<()> {
    let airports = storage.count_airports()?;
    let favorites = storage.count_favorites()?;
    let search_text = storage.search_text().await?;

    if cmd.json {
        let status = serde_json::json!({
            "database_path": storage.path(),
            "airports": airports,
            "favorites": favorites,
            "last_search_text": search_text,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("flisearch status");
        println!("----------------");
        println!("Database:     {}", storage.path().display());
        println!("Airports:     {airports}");
        println!("Favorites:    {favorites}");
        println!(
            "Last search:  {}",
            if search_text.is_empty() {
                "(none)"
            } else {
                search_text.as_str()
            }
        );
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path: {}", config.database_path().display());
                println!();
                println!("[Seed]");
                println!(
                    "  Dataset path:  {}",
                    config
                        .seed
                        .dataset_path
                        .as_ref()
                        .map_or_else(|| "(built-in)".to_string(), |p| p.display().to_string())
                );
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

fn print_flight_table(flights: &[FlightDetail]) {
    println!("{:<5} ROUTE", "FAV");
    for flight in flights {
        println!(
            "{:<5} {} -> {}",
            if flight.is_favorite { "*" } else { "" },
            describe_airport(&flight.departure),
            describe_airport(&flight.arrival)
        );
    }
}

fn describe_airport(airport: &Airport) -> String {
    if airport.is_placeholder() {
        "(unknown airport)".to_string()
    } else {
        format!("{} ({})", airport.name, airport.iata_code)
    }
}
