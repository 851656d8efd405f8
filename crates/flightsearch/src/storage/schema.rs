//! `SQLite` schema definitions for flightsearch.
//!
//! This module contains the SQL statements for creating and managing
//! the database schema.

/// SQL statement to create the airport table.
pub const CREATE_AIRPORT_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS airport (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    iata_code TEXT NOT NULL UNIQUE,
    passengers INTEGER NOT NULL
)
";

/// SQL statement to create an index on airport names for fragment search.
pub const CREATE_AIRPORT_NAME_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_airport_name ON airport(name)
";

/// SQL statement to create the favorite table.
///
/// The UNIQUE constraint on the ordered code pair is the identity of a
/// favorite; the numeric id is a surrogate.
pub const CREATE_FAVORITE_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS favorite (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    departure_code TEXT NOT NULL,
    destination_code TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    UNIQUE(departure_code, destination_code)
)
";

/// SQL statement to create the metadata table for storing key-value pairs.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    CREATE_AIRPORT_TABLE,
    CREATE_AIRPORT_NAME_INDEX,
    CREATE_FAVORITE_TABLE,
    CREATE_METADATA_TABLE,
];
