//! Model module - Application state and data types
//!
//! - `types`: UI/view state types
//! - `movie`: Movie records as decoded from the catalog
//! - `catalog_client`: HTTP client for the movie catalog
//! - `app_model`: Main application model with state management methods

mod types;
mod movie;
mod catalog_client;
mod app_model;

pub use types::{ActiveSection, Listing, UiState, ViewState};

pub use movie::Movie;

pub use catalog_client::{CatalogClient, MovieCatalog};

pub use app_model::AppModel;
