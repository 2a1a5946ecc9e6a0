//! Recording catalog double shared by the controller tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::sync::Notify;

use super::AppController;
use crate::model::{AppModel, Movie, MovieCatalog};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Popular,
    Search(String),
}

#[derive(Default)]
pub struct FakeCatalog {
    calls: Mutex<Vec<Call>>,
    popular: Vec<Movie>,
    searches: HashMap<String, Vec<Movie>>,
    delays: HashMap<String, Duration>,
    gate: Option<Arc<Notify>>,
    fail: bool,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_popular(mut self, movies: Vec<Movie>) -> Self {
        self.popular = movies;
        self
    }

    pub fn with_search(mut self, query: &str, movies: Vec<Movie>) -> Self {
        self.searches.insert(query.to_string(), movies);
        self
    }

    pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    /// Every call blocks until the gate is notified
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn gate(&self) -> Arc<Notify> {
        self.gate.clone().unwrap_or_default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    async fn respond(&self, call: Call, movies: Vec<Movie>) -> Result<Vec<Movie>> {
        let delay = match &call {
            Call::Search(query) => self.delays.get(query).copied(),
            Call::Popular => None,
        };
        self.calls.lock().unwrap().push(call);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail {
            Err(anyhow!("catalog unavailable"))
        } else {
            Ok(movies)
        }
    }
}

#[async_trait]
impl MovieCatalog for FakeCatalog {
    async fn fetch_popular(&self) -> Result<Vec<Movie>> {
        self.respond(Call::Popular, self.popular.clone()).await
    }

    async fn search_by_query(&self, query: &str) -> Result<Vec<Movie>> {
        let movies = self.searches.get(query).cloned().unwrap_or_default();
        self.respond(Call::Search(query.to_string()), movies).await
    }
}

pub fn controller_with(catalog: FakeCatalog) -> (AppController, Arc<FakeCatalog>) {
    let catalog = Arc::new(catalog);
    let model = Arc::new(tokio::sync::Mutex::new(AppModel::new("https://img.example")));
    let controller = AppController::new(model, catalog.clone());
    (controller, catalog)
}

pub fn movie(id: u64) -> Movie {
    Movie {
        id,
        title: format!("Movie {}", id),
        poster_path: Some(format!("/{}.jpg", id)),
        vote_average: Some(7.0),
        release_date: Some("2010-07-16".to_string()),
        overview: Some("Overview".to_string()),
    }
}
