//! Core record types for flightsearch.
//!
//! This module defines the persisted airport and favorite-route records and
//! the derived view records built from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The id used by the placeholder airport.
const PLACEHOLDER_ID: i64 = -1;

/// An airport record.
///
/// Airports are created once at seed time and never mutated. The `id` is
/// assigned by the storage layer; the IATA code is the stable, unique,
/// human-facing identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    /// Unique identifier assigned by the storage layer.
    pub id: i64,

    /// Full airport name.
    pub name: String,

    /// Three-letter IATA code, unique per airport.
    pub iata_code: String,

    /// Annual passenger count. Informational only; the core imposes no
    /// ordering contract on it.
    pub passengers: i64,
}

impl Airport {
    /// The placeholder airport substituted when a favorite references a
    /// code with no matching airport record.
    ///
    /// Reserved for that case only; "no selection" is modeled as `None`,
    /// never as this value.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            id: PLACEHOLDER_ID,
            name: String::new(),
            iata_code: String::new(),
            passengers: 0,
        }
    }

    /// Check whether this is the placeholder airport.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.id == PLACEHOLDER_ID
    }
}

/// A saved favorite route.
///
/// Identity is the ordered (departure, destination) code pair; the numeric
/// `id` is a storage surrogate nothing else keys on. At most one live
/// record exists per ordered pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    /// Unique identifier assigned by the storage layer on insert.
    pub id: i64,

    /// IATA code of the departure airport.
    pub departure_code: String,

    /// IATA code of the destination airport.
    pub destination_code: String,

    /// When this route was saved.
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    /// Check whether this favorite covers the given ordered pair.
    #[must_use]
    pub fn matches_pair(&self, departure: &str, destination: &str) -> bool {
        self.departure_code == departure && self.destination_code == destination
    }
}

/// A single outbound flight, derived fresh on every recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightDetail {
    /// The departure airport.
    pub departure: Airport,

    /// The arrival airport.
    pub arrival: Airport,

    /// Whether a live favorite record exists for exactly this ordered
    /// (departure, arrival) pair.
    pub is_favorite: bool,
}

impl FlightDetail {
    /// The ordered route pair for this flight, as (departure, destination)
    /// IATA codes.
    #[must_use]
    pub fn route(&self) -> (&str, &str) {
        (&self.departure.iata_code, &self.arrival.iata_code)
    }
}

/// An autocomplete candidate derived from a filtered airport record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportAutocomplete {
    /// Three-letter IATA code.
    pub iata_code: String,

    /// Full airport name.
    pub airport_name: String,
}

impl From<&Airport> for AirportAutocomplete {
    fn from(airport: &Airport) -> Self {
        Self {
            iata_code: airport.iata_code.clone(),
            airport_name: airport.name.clone(),
        }
    }
}

/// A published search-session snapshot.
///
/// Snapshots are replaced wholesale on every update, never field-mutated
/// in place, so consumers always observe a consistent state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchUiState {
    /// Current search text.
    pub search_text: String,

    /// Autocomplete candidates for the current search text. Empty when
    /// the search text is empty.
    pub autocomplete: Vec<AirportAutocomplete>,

    /// The selected departure airport, absent when nothing is selected.
    pub selected_departure: Option<Airport>,

    /// All outbound flights for the selected departure airport. Empty
    /// when no airport is selected.
    pub flights: Vec<FlightDetail>,

    /// The favorites view: one entry per saved route.
    pub favorite_routes: Vec<FlightDetail>,

    /// Human-readable message for the most recent store failure, if any.
    pub error_message: Option<String>,
}

impl SearchUiState {
    /// Check whether the snapshot carries an error message.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vienna() -> Airport {
        Airport {
            id: 1,
            name: "Vienna International Airport".to_string(),
            iata_code: "VIE".to_string(),
            passengers: 7_812_938,
        }
    }

    #[test]
    fn test_placeholder_airport() {
        let placeholder = Airport::placeholder();
        assert_eq!(placeholder.id, -1);
        assert!(placeholder.name.is_empty());
        assert!(placeholder.iata_code.is_empty());
        assert_eq!(placeholder.passengers, 0);
        assert!(placeholder.is_placeholder());
    }

    #[test]
    fn test_regular_airport_is_not_placeholder() {
        assert!(!vienna().is_placeholder());
    }

    #[test]
    fn test_favorite_matches_pair_is_direction_sensitive() {
        let favorite = Favorite {
            id: 7,
            departure_code: "VIE".to_string(),
            destination_code: "FCO".to_string(),
            created_at: Utc::now(),
        };
        assert!(favorite.matches_pair("VIE", "FCO"));
        assert!(!favorite.matches_pair("FCO", "VIE"));
        assert!(!favorite.matches_pair("VIE", "SVO"));
    }

    #[test]
    fn test_flight_detail_route() {
        let flight = FlightDetail {
            departure: vienna(),
            arrival: Airport {
                id: 3,
                name: "Leonardo da Vinci International Airport".to_string(),
                iata_code: "FCO".to_string(),
                passengers: 11_662_842,
            },
            is_favorite: false,
        };
        assert_eq!(flight.route(), ("VIE", "FCO"));
    }

    #[test]
    fn test_autocomplete_from_airport() {
        let entry = AirportAutocomplete::from(&vienna());
        assert_eq!(entry.iata_code, "VIE");
        assert_eq!(entry.airport_name, "Vienna International Airport");
    }

    #[test]
    fn test_ui_state_default_is_empty() {
        let state = SearchUiState::default();
        assert!(state.search_text.is_empty());
        assert!(state.autocomplete.is_empty());
        assert!(state.selected_departure.is_none());
        assert!(state.flights.is_empty());
        assert!(state.favorite_routes.is_empty());
        assert!(!state.has_error());
    }

    #[test]
    fn test_airport_serialization_round_trip() {
        let airport = vienna();
        let json = serde_json::to_string(&airport).unwrap();
        let back: Airport = serde_json::from_str(&json).unwrap();
        assert_eq!(airport, back);
    }

    #[test]
    fn test_favorite_serialization_round_trip() {
        let favorite = Favorite {
            id: 1,
            departure_code: "VIE".to_string(),
            destination_code: "SVO".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&favorite).unwrap();
        let back: Favorite = serde_json::from_str(&json).unwrap();
        assert_eq!(favorite, back);
    }
}
