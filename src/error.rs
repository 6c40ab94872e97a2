//! Error types for the movies cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error ==
/// Failure of the underlying key/value backend.
///
/// A missing key is not an error; backends report it as `Ok(None)`.
#[derive(Error, Debug, Clone)]
pub enum CacheError {
    /// Backend rejected or failed the operation
    #[error("Cache backend error: {0}")]
    Backend(String),
}

impl From<redis::RedisError> for CacheError {
    fn from(err: redis::RedisError) -> Self {
        CacheError::Backend(err.to_string())
    }
}

// == Fetch Error ==
/// Failure talking to the upstream movie API.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport or JSON decoding failure
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream API error ({status_code}): {message}")]
    Api { status_code: u16, message: String },
}

// == Store Error ==
/// Failure reading or writing a cached page.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No blob is stored for the page (absent key or empty value)
    #[error("Page {page} not found in cache")]
    NotFound { page: u32 },

    /// The item list could not be encoded
    #[error("Failed to serialize page {page}: {source}")]
    Serialize {
        page: u32,
        #[source]
        source: serde_json::Error,
    },

    /// The stored blob exists but does not parse
    #[error("Failed to deserialize page {page}: {source}")]
    Deserialize {
        page: u32,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Cache(#[from] CacheError),
}

// == Warm-up Error ==
/// Failure that aborts a whole warm-up cycle.
#[derive(Error, Debug)]
pub enum WarmupError {
    #[error("Warm-up fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Warm-up cache write failed: {0}")]
    Cache(#[from] CacheError),
}

// == App Error ==
/// Error surfaced at the HTTP boundary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Warmup(#[from] WarmupError),
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Warmup(WarmupError::Fetch(_)) => StatusCode::BAD_GATEWAY,
            AppError::Warmup(WarmupError::Cache(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!("Request failed: {}", self);

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the HTTP layer.
pub type Result<T> = std::result::Result<T, AppError>;
