//! Core type definitions for the application

use super::movie::Movie;

/// Which section of the UI is currently focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    Search,
    Results,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Results,
            ActiveSection::Results => ActiveSection::Search,
        }
    }

    // Two sections, so cycling backwards lands on the same place
    pub fn prev(self) -> Self {
        self.next()
    }
}

/// Which catalog listing the current results came from
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Listing {
    #[default]
    Popular,
    Search { query: String },
}

impl Listing {
    pub fn title(&self) -> String {
        match self {
            Listing::Popular => " Popular Movies ".to_string(),
            Listing::Search { query } => format!(" Results for \"{}\" ", query),
        }
    }
}

/// Data driving the movie list: results, loading flag and user-facing error
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub movies: Vec<Movie>,
    pub listing: Listing,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            movies: Vec::new(),
            listing: Listing::default(),
            // Nothing is shown until the first popular listing arrives
            is_loading: true,
            error_message: None,
        }
    }
}

/// UI state for the application
#[derive(Clone, Debug)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub search_query: String,
    pub selected: usize,
    pub show_help_popup: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ActiveSection::Search,
            search_query: String::new(),
            selected: 0,
            show_help_popup: false,
        }
    }
}
