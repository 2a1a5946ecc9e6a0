//! Popular listing, debounced search and teardown
//!
//! Every keystroke in the search field replaces the single pending search with
//! a new one that fires after [`SEARCH_DEBOUNCE`]. When it fires, a trimmed
//! query shorter than [`MIN_QUERY_CHARS`] falls back to the popular listing so
//! the view never goes blank while the user is still typing.
//!
//! Each fetch takes a ticket from `request_seq`; a completion only writes to
//! the model while the controller is alive and its ticket is still the newest.

use std::sync::atomic::Ordering;
use std::time::Duration;

use anyhow::Result;
use tokio::task::JoinHandle;

use crate::model::{Listing, Movie};
use super::AppController;

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);
pub const MIN_QUERY_CHARS: usize = 3;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load movies.";
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Please try again.";

/// The one scheduled search owned by the controller
pub(super) struct PendingSearch {
    id: u64,
    handle: JoinHandle<()>,
}

impl AppController {
    fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Load the popular listing shown at start-up
    pub async fn load_initial_movies(&self) {
        tracing::debug!("Loading initial popular listing");
        let Some(ticket) = self.begin_request().await else {
            return;
        };

        let result = self.catalog.fetch_popular().await;
        self.finish_request(ticket, Listing::Popular, result, LOAD_FAILED_MESSAGE)
            .await;
    }

    /// Handle an edit of the search field: cancel the pending search and
    /// schedule a new one for `query`
    pub async fn on_query_changed(&self, query: String) {
        if !self.is_alive() {
            return;
        }

        self.model.lock().await.clear_error().await;

        let mut pending = self.pending_search.lock().await;
        if let Some(previous) = pending.take() {
            tracing::trace!(id = previous.id, "Cancelling pending search");
            previous.handle.abort();
        }

        let id = self.debounce_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let controller = self.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(SEARCH_DEBOUNCE).await;
            // Once fired the search is no longer cancellable by new keystrokes
            controller.release_pending(id).await;
            controller.run_search(&query).await;
        });

        *pending = Some(PendingSearch { id, handle });
    }

    async fn release_pending(&self, id: u64) {
        let mut pending = self.pending_search.lock().await;
        if pending.as_ref().is_some_and(|p| p.id == id) {
            *pending = None;
        }
    }

    /// Execute a debounced search for the raw field contents
    pub async fn run_search(&self, query: &str) {
        let Some(ticket) = self.begin_request().await else {
            return;
        };

        let trimmed = query.trim();
        let (listing, result) = if trimmed.chars().count() < MIN_QUERY_CHARS {
            tracing::debug!(query = trimmed, "Query too short, showing popular movies");
            (Listing::Popular, self.catalog.fetch_popular().await)
        } else {
            tracing::debug!(query = trimmed, "Performing search");
            let listing = Listing::Search {
                query: trimmed.to_string(),
            };
            (listing, self.catalog.search_by_query(trimmed).await)
        };

        self.finish_request(ticket, listing, result, SEARCH_FAILED_MESSAGE)
            .await;
    }

    /// Enter the loading state and hand out a ticket for this fetch.
    /// Returns `None` once the controller has been torn down.
    async fn begin_request(&self) -> Option<u64> {
        let model = self.model.lock().await;
        if !self.is_alive() {
            return None;
        }

        let ticket = self.request_seq.fetch_add(1, Ordering::SeqCst) + 1;
        model.set_loading(true).await;
        Some(ticket)
    }

    async fn finish_request(
        &self,
        ticket: u64,
        listing: Listing,
        result: Result<Vec<Movie>>,
        failure_message: &str,
    ) {
        let model = self.model.lock().await;

        if !self.is_alive() {
            tracing::debug!(ticket, "Controller torn down, dropping response");
            return;
        }
        let latest = self.request_seq.load(Ordering::SeqCst);
        if ticket != latest {
            tracing::debug!(ticket, latest, "Dropping stale response");
            return;
        }

        match result {
            Ok(movies) => {
                tracing::info!(listing = ?listing, count = movies.len(), "Movies loaded");
                model.set_movies(listing, movies).await;
            }
            Err(e) => {
                tracing::error!(listing = ?listing, error = %e, "Movie request failed");
                model.set_error(failure_message).await;
            }
        }
    }

    /// Stop all further state updates and cancel the pending search.
    /// Responses still in flight are discarded when they arrive.
    pub async fn teardown(&self) {
        {
            // Taking the model lock waits out any completion that is mid-write
            let _model = self.model.lock().await;
            self.alive.store(false, Ordering::SeqCst);
        }

        if let Some(pending) = self.pending_search.lock().await.take() {
            pending.handle.abort();
        }
        tracing::info!("Controller torn down");
    }
}
