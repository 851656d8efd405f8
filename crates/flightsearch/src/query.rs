//! Pure derivation functions over airport and favorite records.
//!
//! Everything here is a plain function from record slices to view records:
//! no storage access, no shared state. The search session recomputes these
//! whenever an input changes.

use std::collections::HashSet;

use crate::model::{Airport, AirportAutocomplete, Favorite, FlightDetail};

/// Filter airports by a search fragment and map them to autocomplete
/// candidates.
///
/// An airport matches when its name or its IATA code contains the fragment,
/// case-insensitively. An empty fragment yields an empty result; the caller
/// shows the favorites view instead in that case. Input enumeration order
/// is preserved and no limit is imposed.
#[must_use]
pub fn filter_airports(airports: &[Airport], fragment: &str) -> Vec<AirportAutocomplete> {
    if fragment.is_empty() {
        return Vec::new();
    }

    let needle = fragment.to_lowercase();
    airports
        .iter()
        .filter(|airport| {
            airport.name.to_lowercase().contains(&needle)
                || airport.iata_code.to_lowercase().contains(&needle)
        })
        .map(AirportAutocomplete::from)
        .collect()
}

/// Build the full outbound flight list for a departure airport.
///
/// Produces one [`FlightDetail`] per airport other than the departure
/// itself, in input enumeration order. The favorite flag is resolved by
/// exact ordered-pair lookup against a key set built once per call.
#[must_use]
pub fn build_flights(
    airports: &[Airport],
    favorites: &[Favorite],
    departure: &Airport,
) -> Vec<FlightDetail> {
    let favorite_pairs: HashSet<(&str, &str)> = favorites
        .iter()
        .map(|f| (f.departure_code.as_str(), f.destination_code.as_str()))
        .collect();

    airports
        .iter()
        .filter(|airport| airport.iata_code != departure.iata_code)
        .map(|arrival| FlightDetail {
            departure: departure.clone(),
            arrival: arrival.clone(),
            is_favorite: favorite_pairs
                .contains(&(departure.iata_code.as_str(), arrival.iata_code.as_str())),
        })
        .collect()
}

/// Build the favorites view: one [`FlightDetail`] per saved route, in
/// favorite enumeration order.
///
/// A code that resolves to no airport record substitutes the placeholder
/// airport instead of failing the whole view, so one inconsistent record
/// cannot take down the rest. The favorite flag is true by construction.
#[must_use]
pub fn build_favorite_flights(airports: &[Airport], favorites: &[Favorite]) -> Vec<FlightDetail> {
    favorites
        .iter()
        .map(|favorite| FlightDetail {
            departure: resolve_code(airports, &favorite.departure_code),
            arrival: resolve_code(airports, &favorite.destination_code),
            is_favorite: true,
        })
        .collect()
}

/// Resolve an IATA code against the airport collection, falling back to
/// the placeholder airport.
fn resolve_code(airports: &[Airport], code: &str) -> Airport {
    airports
        .iter()
        .find(|airport| airport.iata_code == code)
        .cloned()
        .unwrap_or_else(Airport::placeholder)
}
