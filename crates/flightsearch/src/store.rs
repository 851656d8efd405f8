//! Store seams consumed by the search session.
//!
//! These traits describe the three collaborator stores the core depends
//! on: the airport record store, the favorite-route store, and the
//! preference store holding the persisted search text. The SQLite-backed
//! implementation lives in [`crate::storage`]; tests substitute doubles.

use crate::error::Result;
use crate::model::{Airport, Favorite};

/// Read access to airport records.
#[async_trait::async_trait]
pub trait AirportStore: Send + Sync {
    /// Find airports whose name or IATA code contains the fragment,
    /// case-insensitively, in natural enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store read fails.
    async fn find_by_fragment(&self, fragment: &str) -> Result<Vec<Airport>>;

    /// Look up a single airport by exact IATA code.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store read fails.
    async fn find_by_code(&self, code: &str) -> Result<Option<Airport>>;

    /// Enumerate all airport records.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store read fails.
    async fn all_airports(&self) -> Result<Vec<Airport>>;
}

/// Read and write access to favorite-route records.
///
/// Favorites are keyed by the ordered (departure, destination) code pair;
/// the numeric id is a storage surrogate.
#[async_trait::async_trait]
pub trait FavoriteStore: Send + Sync {
    /// Enumerate all favorite records.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store read fails.
    async fn all_favorites(&self) -> Result<Vec<Favorite>>;

    /// Insert a favorite for the given ordered pair.
    ///
    /// Inserting a pair that is already saved returns the existing record
    /// rather than creating a duplicate.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store write fails.
    async fn insert_favorite(&self, departure: &str, destination: &str) -> Result<Favorite>;

    /// Delete the favorite for the given ordered pair.
    ///
    /// Deleting a pair that is not saved is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store write fails.
    async fn delete_favorite(&self, departure: &str, destination: &str) -> Result<()>;
}

/// The persisted search-text preference.
#[async_trait::async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read the persisted search text. Empty when never saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store read fails.
    async fn search_text(&self) -> Result<String>;

    /// Persist the search text.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store write fails.
    async fn save_search_text(&self, text: &str) -> Result<()>;
}

/// Convenience bound for a store implementing all three seams.
pub trait SessionStore: AirportStore + FavoriteStore + PreferenceStore {}

impl<T: AirportStore + FavoriteStore + PreferenceStore> SessionStore for T {}
