//! Movie catalog HTTP client
//!
//! Two read-only queries against the external catalog: the popular listing and
//! a free-text search. Every failure (transport, status, decoding) is logged and
//! reported to the caller as an empty list.

use anyhow::Result;
use async_trait::async_trait;

use super::movie::{Movie, MovieListResponse};
use crate::{log_api_request, log_api_result};

/// Source of movie listings used by the controller
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    async fn fetch_popular(&self) -> Result<Vec<Movie>>;

    async fn search_by_query(&self, query: &str) -> Result<Vec<Movie>>;
}

#[derive(Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_movies(&self, path: &str, params: &[(&str, &str)]) -> Result<Vec<Movie>> {
        let response = self
            .client
            .get(self.endpoint(path))
            .query(params)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let body: MovieListResponse = response.json().await?;
        Ok(body.results)
    }

    pub async fn popular(&self) -> Vec<Movie> {
        log_api_request!("fetch_popular");
        let result = self.get_movies("/movie/popular", &[]).await;
        log_api_result!("fetch_popular", result);
        result.unwrap_or_default()
    }

    pub async fn search(&self, query: &str) -> Vec<Movie> {
        if query.is_empty() {
            return Vec::new();
        }

        log_api_request!("search_movies", query);
        let result = self.get_movies("/search/movie", &[("query", query)]).await;
        log_api_result!("search_movies", result);
        result.unwrap_or_default()
    }
}

#[async_trait]
impl MovieCatalog for CatalogClient {
    async fn fetch_popular(&self) -> Result<Vec<Movie>> {
        Ok(self.popular().await)
    }

    async fn search_by_query(&self, query: &str) -> Result<Vec<Movie>> {
        Ok(self.search(query).await)
    }
}
