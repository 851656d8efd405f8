//! Favorite toggling.
//!
//! The single mutation path for favorite routes: a toggle on a flight
//! either saves its route or removes the saved route, keyed by the ordered
//! (departure, destination) pair. Both the all-flights context and the
//! favorites-only context route through here; in the favorites-only
//! context every presented flight is already a favorite, so the toggle
//! degenerates to delete.

use crate::error::Result;
use crate::model::FlightDetail;
use crate::store::FavoriteStore;

/// The store mutation a favorite toggle resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// Save the route as a favorite.
    Insert,
    /// Remove the saved route.
    Remove,
}

impl std::fmt::Display for ToggleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Insert => write!(f, "insert"),
            Self::Remove => write!(f, "remove"),
        }
    }
}

/// Decide what a toggle on the given flight does.
#[must_use]
pub fn toggle_action(flight: &FlightDetail) -> ToggleAction {
    if flight.is_favorite {
        ToggleAction::Remove
    } else {
        ToggleAction::Insert
    }
}

/// Apply a favorite toggle against the store.
///
/// Returns the action that was taken.
///
/// # Errors
///
/// Returns an error if the underlying store write fails.
pub async fn apply_toggle<S: FavoriteStore + ?Sized>(
    store: &S,
    flight: &FlightDetail,
) -> Result<ToggleAction> {
    let (departure, destination) = flight.route();
    let action = toggle_action(flight);
    match action {
        ToggleAction::Insert => {
            store.insert_favorite(departure, destination).await?;
        }
        ToggleAction::Remove => {
            store.delete_favorite(departure, destination).await?;
        }
    }
    Ok(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Airport;
    use crate::storage::Storage;

    fn flight(departure: &str, arrival: &str, is_favorite: bool) -> FlightDetail {
        FlightDetail {
            departure: Airport {
                id: 1,
                name: format!("{departure} airport"),
                iata_code: departure.to_string(),
                passengers: 0,
            },
            arrival: Airport {
                id: 2,
                name: format!("{arrival} airport"),
                iata_code: arrival.to_string(),
                passengers: 0,
            },
            is_favorite,
        }
    }

    #[test]
    fn test_toggle_action_inserts_when_not_favorite() {
        assert_eq!(toggle_action(&flight("VIE", "FCO", false)), ToggleAction::Insert);
    }

    #[test]
    fn test_toggle_action_removes_when_favorite() {
        assert_eq!(toggle_action(&flight("VIE", "FCO", true)), ToggleAction::Remove);
    }

    #[test]
    fn test_toggle_action_display() {
        assert_eq!(ToggleAction::Insert.to_string(), "insert");
        assert_eq!(ToggleAction::Remove.to_string(), "remove");
    }

    #[tokio::test]
    async fn test_apply_toggle_round_trip_restores_pair_set() {
        let storage = Storage::open_in_memory().unwrap();

        let action = apply_toggle(&storage, &flight("VIE", "FCO", false))
            .await
            .unwrap();
        assert_eq!(action, ToggleAction::Insert);
        assert_eq!(storage.all_favorites().await.unwrap().len(), 1);

        // The flight now shows as favorite; toggling again removes it.
        let action = apply_toggle(&storage, &flight("VIE", "FCO", true))
            .await
            .unwrap();
        assert_eq!(action, ToggleAction::Remove);
        assert!(storage.all_favorites().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_apply_toggle_is_direction_sensitive() {
        let storage = Storage::open_in_memory().unwrap();

        apply_toggle(&storage, &flight("VIE", "FCO", false))
            .await
            .unwrap();
        // Removing the reverse pair must not touch the saved route.
        apply_toggle(&storage, &flight("FCO", "VIE", true))
            .await
            .unwrap();

        let favorites = storage.all_favorites().await.unwrap();
        assert_eq!(favorites.len(), 1);
        assert!(favorites[0].matches_pair("VIE", "FCO"));
    }
}
