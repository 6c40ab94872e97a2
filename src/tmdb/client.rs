//! TMDB HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::{Config, DEFAULT_BASE_URL};
use crate::error::FetchError;
use crate::tmdb::models::{Genre, GenresResponse, UpcomingPage};

// == Movie Source ==
/// Source of upcoming pages and genres.
///
/// Errors are never retried here; callers decide whether to abort.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Fetches upcoming page `page` (1-based).
    async fn fetch_page(&self, page: u32) -> Result<UpcomingPage, FetchError>;

    /// Fetches the full movie genre list.
    async fn fetch_genres(&self) -> Result<Vec<Genre>, FetchError>;
}

// == TMDB Client ==
#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl TmdbClient {
    /// Creates a client against the public TMDB API with the `en-US` locale.
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            language: "en-US".to_string(),
        }
    }

    /// Builds a client from configuration, applying the request timeout.
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self::new(client, config.api_key.clone())
            .with_base_url(config.base_url.clone())
            .with_language(config.language.clone()))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.get(self.url(path)).query(&[
            ("api_key", self.api_key.as_str()),
            ("language", self.language.as_str()),
        ])
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, FetchError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetchError::Api {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl MovieSource for TmdbClient {
    async fn fetch_page(&self, page: u32) -> Result<UpcomingPage, FetchError> {
        debug!("Fetching upcoming page {}", page);
        let response = self
            .get("/movie/upcoming")
            .query(&[("page", page)])
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn fetch_genres(&self) -> Result<Vec<Genre>, FetchError> {
        debug!("Fetching movie genres");
        let response = self.get("/genre/movie/list").send().await?;
        let body: GenresResponse = self.handle_response(response).await?;
        Ok(body.genres)
    }
}
