//! Response DTOs for the movies cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::{Deserialize, Serialize};

use crate::tmdb::MovieListItem;

/// Response body for the upcoming listing (GET /)
///
/// Items of every cached page, in ascending page order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpcomingResponse {
    pub data: Vec<MovieListItem>,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Whether a warm-up has discovered the page count
    pub ready: bool,
    /// Page count of the last warm-up
    pub total_pages: Option<u32>,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(total_pages: Option<u32>) -> Self {
        Self {
            status: "healthy".to_string(),
            ready: total_pages.is_some(),
            total_pages,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for a triggered warm-up (POST /warmup)
#[derive(Debug, Clone, Serialize)]
pub struct WarmupResponse {
    /// Page count reported by upstream
    pub total_pages: u32,
    /// Pages fetched before the warm-up returned
    pub fetched: u32,
    /// Page whose fetch failed and stopped the warm-up, if any
    pub failed_page: Option<u32>,
    /// Background stores still running when the response was built
    pub pending_stores: usize,
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
