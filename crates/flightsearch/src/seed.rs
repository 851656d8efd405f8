//! Seed dataset loading for flightsearch.
//!
//! The airport table is populated once from a seed dataset: either a JSON
//! file supplied by the user or the built-in default list. Seeding is
//! idempotent per code, so re-running it only adds airports that are not
//! already present.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::storage::Storage;

/// One airport entry in a seed dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAirport {
    /// Full airport name.
    pub name: String,
    /// Three-letter IATA code.
    pub iata_code: String,
    /// Annual passenger count.
    pub passengers: i64,
}

/// Load a seed dataset from a JSON file.
///
/// The file holds a JSON array of `{name, iata_code, passengers}` objects.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<SeedAirport>> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let airports: Vec<SeedAirport> = serde_json::from_str(&content)?;
    Ok(airports)
}

/// The built-in default dataset of European airports.
#[must_use]
pub fn default_dataset() -> Vec<SeedAirport> {
    let entries: &[(&str, &str, i64)] = &[
        ("Vienna International Airport", "VIE", 7_812_938),
        (
            "Sheremetyevo - A.S. Pushkin international airport",
            "SVO",
            49_933_000,
        ),
        ("Leonardo da Vinci International Airport", "FCO", 11_662_842),
        ("Munich International Airport", "MUC", 47_959_885),
        ("Charles de Gaulle Airport", "CDG", 76_150_007),
        ("Stockholm Arlanda Airport", "ARN", 26_643_383),
        ("Warsaw Chopin Airport", "WAW", 18_860_000),
        ("Marseille Provence Airport", "MRS", 10_151_743),
        ("Milan Bergamo Airport", "BGY", 12_336_137),
        ("Athens International Airport", "ATH", 25_574_030),
    ];

    entries
        .iter()
        .map(|&(name, iata_code, passengers)| SeedAirport {
            name: name.to_string(),
            iata_code: iata_code.to_string(),
            passengers,
        })
        .collect()
}

/// Insert the given airports into storage, skipping codes that are
/// already present.
///
/// Returns the number of airports actually inserted.
///
/// # Errors
///
/// Returns an error if a code is malformed or a database operation fails.
pub fn seed_storage(storage: &Storage, airports: &[SeedAirport]) -> Result<usize> {
    let mut inserted = 0;
    for airport in airports {
        if storage.airport_exists(&airport.iata_code)? {
            debug!("Skipping existing airport {}", airport.iata_code);
            continue;
        }
        storage.insert_airport(&airport.name, &airport.iata_code, airport.passengers)?;
        inserted += 1;
    }

    info!(
        "Seeded {} airports ({} already present)",
        inserted,
        airports.len() - inserted
    );
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dataset_codes_are_unique_and_well_formed() {
        let dataset = default_dataset();
        assert!(!dataset.is_empty());

        let mut codes: Vec<&str> = dataset.iter().map(|a| a.iata_code.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), dataset.len());

        for airport in &dataset {
            assert_eq!(airport.iata_code.len(), 3);
            assert!(airport.iata_code.chars().all(|c| c.is_ascii_uppercase()));
            assert!(airport.passengers >= 0);
        }
    }

    #[test]
    fn test_seed_storage_inserts_all() {
        let storage = Storage::open_in_memory().unwrap();
        let dataset = default_dataset();

        let inserted = seed_storage(&storage, &dataset).unwrap();
        assert_eq!(inserted, dataset.len());
        assert_eq!(
            storage.count_airports().unwrap(),
            i64::try_from(dataset.len()).unwrap()
        );
    }

    #[test]
    fn test_seed_storage_skips_existing_codes() {
        let storage = Storage::open_in_memory().unwrap();
        let dataset = default_dataset();

        seed_storage(&storage, &dataset).unwrap();
        let inserted = seed_storage(&storage, &dataset).unwrap();

        assert_eq!(inserted, 0);
        assert_eq!(
            storage.count_airports().unwrap(),
            i64::try_from(dataset.len()).unwrap()
        );
    }

    #[test]
    fn test_load_dataset_round_trip() {
        let temp_dir = std::env::temp_dir();
        let path = temp_dir.join(format!("flightsearch_seed_test_{}.json", std::process::id()));

        let dataset = default_dataset();
        std::fs::write(&path, serde_json::to_string(&dataset).unwrap()).unwrap();

        let loaded = load_dataset(&path).unwrap();
        assert_eq!(loaded, dataset);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_dataset_missing_file() {
        let result = load_dataset("/nonexistent/seed.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_dataset_malformed_json() {
        let temp_dir = std::env::temp_dir();
        let path = temp_dir.join(format!("flightsearch_seed_bad_{}.json", std::process::id()));
        std::fs::write(&path, "not valid json").unwrap();

        let result = load_dataset(&path);
        assert!(result.is_err());

        let _ = std::fs::remove_file(&path);
    }
}
