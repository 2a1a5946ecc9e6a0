//! Start-up configuration read from the environment (and an optional `.env` file)

const BASE_URL_VAR: &str = "MOVIES_API_BASE_URL";
const API_KEY_VAR: &str = "MOVIES_API_KEY";
const IMAGE_BASE_URL_VAR: &str = "MOVIES_IMAGE_BASE_URL";

pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub api_key: String,
    pub image_base_url: String,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// A missing base URL or API key is not an error: requests built from
    /// them fail and the catalog client reports an empty result instead.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!(error = %e, "No .env file loaded");
        }

        let config = Self::from_lookup(|key| std::env::var(key).ok());

        if config.api_base_url.is_empty() {
            tracing::warn!(var = BASE_URL_VAR, "Catalog base URL is not set");
        }
        if config.api_key.is_empty() {
            tracing::warn!(var = API_KEY_VAR, "Catalog API key is not set");
        }

        config
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_base_url: lookup(BASE_URL_VAR).unwrap_or_default(),
            api_key: lookup(API_KEY_VAR).unwrap_or_default(),
            image_base_url: lookup(IMAGE_BASE_URL_VAR)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_string()),
        }
    }
}
