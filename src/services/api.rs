use crate::models::{error::AppError, grid_mix::GridMix};
use reqwest::Url;
use serde::Deserialize;

// CONSTANTS
const AUTHORITIES_PATH: &str = "balancing-authorities";
const GRID_MIX_PATH: &str = "grid-mix";
const AUTHORITY_PARAM: &str = "balancing_authority";

#[cfg(not(target_arch = "wasm32"))]
const FALLBACK_BASE_URL: &str = "http://localhost:8000/api";

/// API root served next to the dashboard.
#[cfg(target_arch = "wasm32")]
fn default_base_url() -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{origin}/api")
}

#[cfg(not(target_arch = "wasm32"))]
fn default_base_url() -> String {
    FALLBACK_BASE_URL.to_string()
}

// API CONFIGURATION
/// Configuration for the grid-mix API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL listing the available balancing authorities.
    pub fn authorities_url(&self) -> Result<Url, AppError> {
        self.endpoint(AUTHORITIES_PATH)
    }

    /// URL of the generation mix for one authority.
    pub fn grid_mix_url(&self, authority: &str) -> Result<Url, AppError> {
        let mut url = self.endpoint(GRID_MIX_PATH)?;
        url.query_pairs_mut().append_pair(AUTHORITY_PARAM, authority);
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        let raw = format!("{}/{path}", self.base_url.trim_end_matches('/'));
        Url::parse(&raw).map_err(|e| AppError::ConfigError(format!("Invalid API URL {raw}: {e}")))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(default_base_url),
        }
    }
}

// API RESPONSE TYPES
#[derive(Deserialize, Debug)]
struct AuthoritiesResponse {
    balancing_authorities: Vec<String>,
}

// GRID MIX CLIENT
/// HTTP client for the grid-mix API.
pub struct GridMixClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl GridMixClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Fetches the list of balancing authority codes.
    pub async fn fetch_balancing_authorities(&self) -> Result<Vec<String>, AppError> {
        let url = self.config.authorities_url()?;
        let response = self.get(url).await?;

        let body: AuthoritiesResponse = response
            .json()
            .await
            .map_err(|e| AppError::DataError(format!("Failed to parse authorities: {e}")))?;

        Ok(body.balancing_authorities)
    }

    /// Fetches the generation mix for `authority`.
    pub async fn fetch_grid_mix(&self, authority: &str) -> Result<GridMix, AppError> {
        let url = self.config.grid_mix_url(authority)?;
        let response = self.get(url).await?;

        let body = response
            .text()
            .await
            .map_err(|e| self.classify_error(e))?;

        GridMix::from_json(&body)
    }

    /// Executes a GET and rejects non-success statuses.
    async fn get(&self, url: Url) -> Result<reqwest::Response, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Status {
                code: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else if error.is_decode() {
            AppError::DataError(format!("Failed to read response: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the authority list using default configuration.
pub async fn fetch_balancing_authorities() -> Result<Vec<String>, AppError> {
    GridMixClient::new()?.fetch_balancing_authorities().await
}

/// Fetches the generation mix for one authority using default configuration.
pub async fn fetch_grid_mix(authority: &str) -> Result<GridMix, AppError> {
    GridMixClient::new()?.fetch_grid_mix(authority).await
}
