//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//!
//! - `utils`: Shared helpers (truncation, scrollable lists, skeleton rows)
//! - `layout`: Top bar and status line
//! - `content`: Movie list and details pane
//! - `overlays`: Modal overlays (error, help)

mod utils;
mod layout;
mod content;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{UiState, ViewState};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, ui_state: &UiState, view_state: &ViewState, image_base_url: &str) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar + status
                Constraint::Min(0),    // Movie list + details
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], ui_state, view_state);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // Movie list
                Constraint::Percentage(40), // Details
            ])
            .split(chunks[1]);

        content::render_movie_list(frame, main_chunks[0], ui_state, view_state);
        content::render_movie_details(frame, main_chunks[1], ui_state, view_state, image_base_url);

        layout::render_status_line(frame, chunks[2], ui_state);

        if let Some(error_msg) = &view_state.error_message {
            overlays::render_error_notification(frame, error_msg);
        }

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
