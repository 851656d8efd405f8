//! The reactive search session.
//!
//! [`SearchSession`] owns the current search text, the selected departure
//! airport, and the derived views, and republishes a fresh
//! [`SearchUiState`] snapshot whenever any of them changes. Consumers
//! subscribe to the snapshot stream; they never pull or mutate state
//! directly.
//!
//! Store failures never escape the session: they are converted into a
//! human-readable message in the snapshot's error slot while the prior
//! derived views are retained. Snapshots are replaced wholesale, and a
//! generation counter guarantees that a superseded in-flight
//! recomputation can never overwrite a later result.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::favorite;
use crate::model::{Airport, FlightDetail, SearchUiState};
use crate::query;
use crate::store::SessionStore;

/// The reactive state holder for one search session.
///
/// Created at session start, torn down by drop. One logical owner drives
/// the operations; any number of consumers may subscribe to the snapshot
/// stream.
pub struct SearchSession<S> {
    store: Arc<S>,
    tx: watch::Sender<SearchUiState>,
    generation: AtomicU64,
    published: Mutex<u64>,
}

impl<S> std::fmt::Debug for SearchSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

impl<S: SessionStore> SearchSession<S> {
    /// Create a session over the given store, starting from the default
    /// (empty) snapshot.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        let (tx, _rx) = watch::channel(SearchUiState::default());
        Self {
            store,
            tx,
            generation: AtomicU64::new(0),
            published: Mutex::new(0),
        }
    }

    /// Subscribe to the snapshot stream.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SearchUiState> {
        self.tx.subscribe()
    }

    /// The most recently published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SearchUiState {
        self.tx.borrow().clone()
    }

    /// Initialize the session: compute the favorites view and restore the
    /// persisted search text, replaying it through [`Self::set_search_text`]
    /// when non-empty.
    pub async fn start(&self) {
        self.refresh_favorites().await;

        match self.store.search_text().await {
            Ok(text) if !text.is_empty() => self.set_search_text(&text).await,
            Ok(_) => {}
            Err(e) => self.publish_error(&e),
        }
    }

    /// Replace the search text and recompute the dependent views.
    ///
    /// The text is persisted best-effort: a failed save is logged and the
    /// in-memory value is kept. Empty text clears the autocomplete view
    /// and reactivates the favorites view as the primary display
    /// candidate; non-empty text recomputes the autocomplete candidates.
    pub async fn set_search_text(&self, text: &str) {
        let generation = self.next_generation();
        let mut next = self.snapshot();
        next.search_text = text.to_string();
        next.error_message = None;

        if let Err(e) = self.store.save_search_text(text).await {
            warn!("Failed to persist search text: {e}");
        }

        if text.is_empty() {
            next.autocomplete = Vec::new();
            match self.favorites_view().await {
                Ok(favorites) => next.favorite_routes = favorites,
                Err(e) => next.error_message = Some(e.to_string()),
            }
        } else {
            match self.store.all_airports().await {
                Ok(airports) => next.autocomplete = query::filter_airports(&airports, text),
                Err(e) => next.error_message = Some(e.to_string()),
            }
        }

        self.publish(generation, next);
    }

    /// Select a departure airport by exact IATA code and compute its
    /// outbound flight list.
    ///
    /// An unknown code sets the error slot and leaves the prior selection
    /// and views untouched.
    pub async fn select_departure(&self, code: &str) {
        let generation = self.next_generation();
        let mut next = self.snapshot();
        next.error_message = None;

        match self.store.find_by_code(code).await {
            Ok(Some(airport)) => match self.flights_view(&airport).await {
                Ok(flights) => {
                    next.selected_departure = Some(airport);
                    next.flights = flights;
                }
                Err(e) => next.error_message = Some(e.to_string()),
            },
            Ok(None) => {
                next.error_message = Some(Error::airport_not_found(code).to_string());
            }
            Err(e) => next.error_message = Some(e.to_string()),
        }

        self.publish(generation, next);
    }

    /// Clear the departure selection and its flight list. The search text
    /// is untouched.
    pub fn clear_selection(&self) {
        let generation = self.next_generation();
        let mut next = self.snapshot();
        next.selected_departure = None;
        next.flights = Vec::new();
        self.publish(generation, next);
    }

    /// Toggle a flight's favorite status and recompute every view the
    /// route appears in, so the favorite flag stays consistent.
    pub async fn toggle_favorite(&self, flight: &FlightDetail) {
        let generation = self.next_generation();
        let mut next = self.snapshot();
        next.error_message = None;

        match favorite::apply_toggle(self.store.as_ref(), flight).await {
            Ok(_) => match self.views_after_toggle(next.selected_departure.as_ref()).await {
                Ok((favorite_routes, flights)) => {
                    next.favorite_routes = favorite_routes;
                    if let Some(flights) = flights {
                        next.flights = flights;
                    }
                }
                Err(e) => next.error_message = Some(e.to_string()),
            },
            Err(e) => next.error_message = Some(e.to_string()),
        }

        self.publish(generation, next);
    }

    /// Recompute the favorites view on demand.
    pub async fn refresh_favorites(&self) {
        let generation = self.next_generation();
        let mut next = self.snapshot();

        match self.favorites_view().await {
            Ok(favorites) => {
                next.favorite_routes = favorites;
                next.error_message = None;
            }
            Err(e) => next.error_message = Some(e.to_string()),
        }

        self.publish(generation, next);
    }

    async fn favorites_view(&self) -> Result<Vec<FlightDetail>> {
        let airports = self.store.all_airports().await?;
        let favorites = self.store.all_favorites().await?;
        Ok(query::build_favorite_flights(&airports, &favorites))
    }

    async fn flights_view(&self, departure: &Airport) -> Result<Vec<FlightDetail>> {
        let airports = self.store.all_airports().await?;
        let favorites = self.store.all_favorites().await?;
        Ok(query::build_flights(&airports, &favorites, departure))
    }

    /// Rebuild the favorites view and, when a departure is selected, the
    /// flights view, from a single read of each store so the two stay
    /// consistent.
    async fn views_after_toggle(
        &self,
        selected: Option<&Airport>,
    ) -> Result<(Vec<FlightDetail>, Option<Vec<FlightDetail>>)> {
        let airports = self.store.all_airports().await?;
        let favorites = self.store.all_favorites().await?;
        let favorite_routes = query::build_favorite_flights(&airports, &favorites);
        let flights =
            selected.map(|departure| query::build_flights(&airports, &favorites, departure));
        Ok((favorite_routes, flights))
    }

    fn publish_error(&self, error: &Error) {
        let generation = self.next_generation();
        let mut next = self.snapshot();
        next.error_message = Some(error.to_string());
        self.publish(generation, next);
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Publish a snapshot unless a newer generation already published.
    fn publish(&self, generation: u64, next: SearchUiState) {
        let mut latest = self
            .published
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if generation >= *latest {
            *latest = generation;
            self.tx.send_replace(next);
        } else {
            debug!("Dropping superseded snapshot (generation {generation})");
        }
    }
}
