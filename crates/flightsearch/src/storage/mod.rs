//! Storage layer for flightsearch.
//!
//! This module provides `SQLite`-based persistent storage for airport and
//! favorite-route records, and implements the three store seams the search
//! session consumes. The persisted search-text preference lives in the
//! metadata key-value table alongside the schema version.

pub mod migrations;
pub mod schema;

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::{Airport, Favorite};
use crate::store::{AirportStore, FavoriteStore, PreferenceStore};

/// Metadata key holding the persisted search text.
const SEARCH_TEXT_KEY: &str = "search_text";

/// Storage engine for airport and favorite records.
///
/// Provides persistent storage using `SQLite` with support for:
/// - Airport seeding and fragment/code lookup
/// - Favorite insertion and deletion keyed by the ordered route pair
/// - The persisted search-text preference
#[derive(Debug)]
pub struct Storage {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection. The session shares the storage behind an
    /// `Arc`, so the connection sits behind a lock.
    conn: Mutex<Connection>,
}

impl Storage {
    /// Open or create a storage database at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist.
    /// Initializes the schema if this is a new database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        // Enable WAL mode for better concurrent read performance
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        migrations::initialize_schema(&conn)?;

        info!("Database opened successfully at {}", path.display());
        Ok(Self {
            path,
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory storage instance for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn: Mutex::new(conn),
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| Error::internal("storage connection lock poisoned"))
    }

    /// Insert an airport record.
    ///
    /// The IATA code must be three uppercase ASCII letters and unique.
    /// Returns the stored record with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is malformed, already present, or the
    /// database operation fails.
    pub fn insert_airport(&self, name: &str, iata_code: &str, passengers: i64) -> Result<Airport> {
        validate_iata_code(iata_code)?;

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO airport (name, iata_code, passengers) VALUES (?1, ?2, ?3)",
            params![name, iata_code, passengers],
        )?;

        let id = conn.last_insert_rowid();
        debug!("Inserted airport {} with id {}", iata_code, id);
        Ok(Airport {
            id,
            name: name.to_string(),
            iata_code: iata_code.to_string(),
            passengers,
        })
    }

    /// Check whether an airport with the given code exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn airport_exists(&self, iata_code: &str) -> Result<bool> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM airport WHERE iata_code = ?1",
            [iata_code.to_uppercase()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Count airport records.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn count_airports(&self) -> Result<i64> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM airport", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Count favorite records.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn count_favorites(&self) -> Result<i64> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM favorite", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Convert a database row to an Airport struct.
    fn row_to_airport(row: &rusqlite::Row) -> rusqlite::Result<Airport> {
        Ok(Airport {
            id: row.get(0)?,
            name: row.get(1)?,
            iata_code: row.get(2)?,
            passengers: row.get(3)?,
        })
    }

    /// Convert a database row to a Favorite struct.
    fn row_to_favorite(row: &rusqlite::Row) -> rusqlite::Result<Favorite> {
        let created_at_str: String = row.get(3)?;
        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc));

        Ok(Favorite {
            id: row.get(0)?,
            departure_code: row.get(1)?,
            destination_code: row.get(2)?,
            created_at,
        })
    }
}

#[async_trait::async_trait]
impl AirportStore for Storage {
    async fn find_by_fragment(&self, fragment: &str) -> Result<Vec<Airport>> {
        let pattern = format!("%{fragment}%");
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            r"
            SELECT id, name, iata_code, passengers FROM airport
            WHERE name LIKE ?1 OR iata_code LIKE ?1
            ORDER BY id
            ",
        )?;

        let airports = stmt
            .query_map([pattern], Self::row_to_airport)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(airports)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Airport>> {
        let conn = self.lock()?;
        let airport = conn
            .query_row(
                "SELECT id, name, iata_code, passengers FROM airport WHERE iata_code = ?1",
                [code.to_uppercase()],
                Self::row_to_airport,
            )
            .optional()?;
        Ok(airport)
    }

    async fn all_airports(&self) -> Result<Vec<Airport>> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare("SELECT id, name, iata_code, passengers FROM airport ORDER BY id")?;

        let airports = stmt
            .query_map([], Self::row_to_airport)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(airports)
    }
}

#[async_trait::async_trait]
impl FavoriteStore for Storage {
    async fn all_favorites(&self) -> Result<Vec<Favorite>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, departure_code, destination_code, created_at FROM favorite ORDER BY id",
        )?;

        let favorites = stmt
            .query_map([], Self::row_to_favorite)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(favorites)
    }

    async fn insert_favorite(&self, departure: &str, destination: &str) -> Result<Favorite> {
        let departure = departure.to_uppercase();
        let destination = destination.to_uppercase();
        let created_at = Utc::now().to_rfc3339();

        let conn = self.lock()?;
        // The pair is the identity; a conflicting insert keeps the
        // existing record.
        let inserted = conn.execute(
            r"
            INSERT INTO favorite (departure_code, destination_code, created_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(departure_code, destination_code) DO NOTHING
            ",
            params![departure, destination, created_at],
        )?;

        if inserted > 0 {
            debug!("Saved favorite route {} -> {}", departure, destination);
        }

        let favorite = conn.query_row(
            r"
            SELECT id, departure_code, destination_code, created_at FROM favorite
            WHERE departure_code = ?1 AND destination_code = ?2
            ",
            params![departure, destination],
            Self::row_to_favorite,
        )?;
        Ok(favorite)
    }

    async fn delete_favorite(&self, departure: &str, destination: &str) -> Result<()> {
        let conn = self.lock()?;
        let affected = conn.execute(
            "DELETE FROM favorite WHERE departure_code = ?1 AND destination_code = ?2",
            params![departure.to_uppercase(), destination.to_uppercase()],
        )?;

        if affected > 0 {
            debug!("Removed favorite route {} -> {}", departure, destination);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl PreferenceStore for Storage {
    async fn search_text(&self) -> Result<String> {
        let conn = self.lock()?;
        let text: Option<String> = conn
            .query_row(
                "SELECT value FROM metadata WHERE key = ?1",
                [SEARCH_TEXT_KEY],
                |row| row.get(0),
            )
            .optional()?;
        Ok(text.unwrap_or_default())
    }

    async fn save_search_text(&self, text: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO metadata (key, value) VALUES (?1, ?2)",
            params![SEARCH_TEXT_KEY, text],
        )?;
        Ok(())
    }
}

/// Validate that a code is three uppercase ASCII letters.
fn validate_iata_code(code: &str) -> Result<()> {
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(Error::invalid_iata_code(code))
    }
}
