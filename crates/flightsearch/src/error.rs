//! Error types for flightsearch.
//!
//! This module defines all error types used throughout the flightsearch crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for flightsearch operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// Failed to open or create the database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// Failed to run database migrations.
    #[error("database migration failed: {message}")]
    DatabaseMigration {
        /// Description of what went wrong.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Lookup Errors ===
    /// No airport exists with the given IATA code.
    #[error("unknown airport code: {code}")]
    AirportNotFound {
        /// The code that failed to resolve.
        code: String,
    },

    /// An IATA code did not have the expected three-uppercase-letter form.
    #[error("invalid IATA code: {code:?}")]
    InvalidIataCode {
        /// The rejected code.
        code: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for flightsearch operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create an error for an IATA code that resolved to no airport.
    #[must_use]
    pub fn airport_not_found(code: impl Into<String>) -> Self {
        Self::AirportNotFound { code: code.into() }
    }

    /// Create an error for a malformed IATA code.
    #[must_use]
    pub fn invalid_iata_code(code: impl Into<String>) -> Self {
        Self::InvalidIataCode { code: code.into() }
    }

    /// Check if this error is a failed airport lookup.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AirportNotFound { .. })
    }
}
