//! Main application model with state management

use std::sync::Arc;
use tokio::sync::Mutex;

use super::movie::Movie;
use super::types::{ActiveSection, Listing, UiState, ViewState};

/// Main application model containing all state
pub struct AppModel {
    pub view_state: Arc<Mutex<ViewState>>,
    pub ui_state: Arc<Mutex<UiState>>,
    pub should_quit: Arc<Mutex<bool>>,
    image_base_url: String,
}

impl AppModel {
    pub fn new(image_base_url: impl Into<String>) -> Self {
        Self {
            view_state: Arc::new(Mutex::new(ViewState::default())),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            should_quit: Arc::new(Mutex::new(false)),
            image_base_url: image_base_url.into(),
        }
    }

    pub fn image_base_url(&self) -> &str {
        &self.image_base_url
    }

    // ========================================================================
    // View State (results, loading, error)
    // ========================================================================

    pub async fn get_view_state(&self) -> ViewState {
        self.view_state.lock().await.clone()
    }

    pub async fn set_loading(&self, loading: bool) {
        self.view_state.lock().await.is_loading = loading;
    }

    /// Replace the result list wholesale and finish loading
    pub async fn set_movies(&self, listing: Listing, movies: Vec<Movie>) {
        {
            let mut view = self.view_state.lock().await;
            view.movies = movies;
            view.listing = listing;
            view.is_loading = false;
        }
        self.ui_state.lock().await.selected = 0;
    }

    /// Record a failed fetch. The previous results stay on screen.
    pub async fn set_error(&self, message: impl Into<String>) {
        let mut view = self.view_state.lock().await;
        view.error_message = Some(message.into());
        view.is_loading = false;
    }

    pub async fn clear_error(&self) {
        self.view_state.lock().await.error_message = None;
    }

    pub async fn has_error(&self) -> bool {
        self.view_state.lock().await.error_message.is_some()
    }

    // ========================================================================
    // UI State
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    pub async fn cycle_section_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn cycle_section_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.prev();
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        self.ui_state.lock().await.active_section = section;
    }

    /// Returns the updated query
    pub async fn append_to_search(&self, c: char) -> String {
        let mut state = self.ui_state.lock().await;
        state.search_query.push(c);
        state.search_query.clone()
    }

    /// Returns the updated query, or `None` when there was nothing to delete
    pub async fn backspace_search(&self) -> Option<String> {
        let mut state = self.ui_state.lock().await;
        state.search_query.pop()?;
        Some(state.search_query.clone())
    }

    /// Returns `true` if the query was non-empty before clearing
    pub async fn clear_search(&self) -> bool {
        let mut state = self.ui_state.lock().await;
        let had_text = !state.search_query.is_empty();
        state.search_query.clear();
        had_text
    }

    pub async fn move_selection_up(&self) {
        let mut state = self.ui_state.lock().await;
        state.selected = state.selected.saturating_sub(1);
    }

    pub async fn move_selection_down(&self) {
        let count = self.view_state.lock().await.movies.len();
        let mut state = self.ui_state.lock().await;
        if state.selected < count.saturating_sub(1) {
            state.selected += 1;
        }
    }

    pub async fn select_first(&self) {
        self.ui_state.lock().await.selected = 0;
    }

    pub async fn select_last(&self) {
        let count = self.view_state.lock().await.movies.len();
        self.ui_state.lock().await.selected = count.saturating_sub(1);
    }

    pub async fn toggle_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = !state.show_help_popup;
    }

    pub async fn hide_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }
}
