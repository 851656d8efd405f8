//! `flightsearch` - A local airport lookup and favorite-route tracker
//!
//! This library provides the core functionality for searching airports by
//! name or IATA code, deriving outbound flight lists, and tracking
//! favorite routes with a persisted last-search preference.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod favorite;
pub mod logging;
pub mod model;
pub mod query;
pub mod seed;
pub mod state;
pub mod storage;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use model::{Airport, AirportAutocomplete, Favorite, FlightDetail, SearchUiState};
pub use state::SearchSession;
pub use storage::Storage;
