//! Controller module - Application logic and event handling
//!
//! - `input`: Key event handling
//! - `search`: Initial load, debounced search and teardown

mod input;
mod search;

#[cfg(test)]
mod test_support;

use std::sync::atomic::{AtomicBool, AtomicU64};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::{AppModel, MovieCatalog};

use search::PendingSearch;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    catalog: Arc<dyn MovieCatalog>,
    pending_search: Arc<Mutex<Option<PendingSearch>>>,
    // Cleared on teardown; completions check it before touching the model
    alive: Arc<AtomicBool>,
    // Latest fetch ticket; only the newest request may write results
    request_seq: Arc<AtomicU64>,
    debounce_seq: Arc<AtomicU64>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>, catalog: Arc<dyn MovieCatalog>) -> Self {
        Self {
            model,
            catalog,
            pending_search: Arc::new(Mutex::new(None)),
            alive: Arc::new(AtomicBool::new(true)),
            request_seq: Arc::new(AtomicU64::new(0)),
            debounce_seq: Arc::new(AtomicU64::new(0)),
        }
    }
}
