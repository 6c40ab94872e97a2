//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::cache::Cache;
use crate::error::Result;
use crate::models::{HealthResponse, UpcomingResponse, WarmupResponse};
use crate::tmdb::MovieSource;
use crate::warmup::{Aggregator, WarmState, Warmer};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Runs warm-up cycles
    pub warmer: Warmer,
    /// Serves the merged listing from cache
    pub aggregator: Aggregator,
}

impl AppState {
    /// Wires a warmer and an aggregator over the same cache and readiness state.
    pub fn new(source: Arc<dyn MovieSource>, cache: Arc<dyn Cache>) -> Self {
        let warmer = Warmer::new(source, cache, WarmState::new());
        let aggregator = Aggregator::new(warmer.pages().clone(), warmer.state().clone());
        Self { warmer, aggregator }
    }
}

/// Handler for GET /
///
/// Returns every cached upcoming movie. Empty until a warm-up has run.
pub async fn upcoming_handler(State(state): State<AppState>) -> Result<Json<UpcomingResponse>> {
    let response = state.aggregator.get_upcoming().await?;
    Ok(Json(response))
}

/// Handler for POST /warmup
///
/// Runs a warm-up cycle; page stores continue in the background after the response.
pub async fn warmup_handler(State(state): State<AppState>) -> Result<Json<WarmupResponse>> {
    let report = state.warmer.warm().await?;

    let response = WarmupResponse {
        total_pages: report.total_pages,
        fetched: report.fetched,
        failed_page: report.failure.as_ref().map(|f| f.page),
        pending_stores: report.tasks.len(),
    };
    report.tasks.detach();

    Ok(Json(response))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.aggregator.state().total_pages()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::cache::MemoryCache;
    use crate::error::{AppError, FetchError};
    use crate::tmdb::{Genre, MovieListItem, UpcomingPage};

    struct TwoPages;

    #[async_trait]
    impl MovieSource for TwoPages {
        async fn fetch_page(&self, page: u32) -> std::result::Result<UpcomingPage, FetchError> {
            Ok(UpcomingPage {
                page,
                results: vec![MovieListItem {
                    id: page as i64,
                    genre_ids: vec![12],
                    ..Default::default()
                }],
                total_pages: 2,
                total_results: 2,
            })
        }

        async fn fetch_genres(&self) -> std::result::Result<Vec<Genre>, FetchError> {
            Ok(vec![Genre {
                id: 12,
                name: "Adventure".to_string(),
            }])
        }
    }

    struct Offline;

    #[async_trait]
    impl MovieSource for Offline {
        async fn fetch_page(&self, _page: u32) -> std::result::Result<UpcomingPage, FetchError> {
            Err(FetchError::Api {
                status_code: 503,
                message: "offline".to_string(),
            })
        }

        async fn fetch_genres(&self) -> std::result::Result<Vec<Genre>, FetchError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_upcoming_handler_cold_is_empty() {
        let state = AppState::new(Arc::new(TwoPages), Arc::new(MemoryCache::new()));

        let response = upcoming_handler(State(state)).await.unwrap();
        assert!(response.data.is_empty());
    }

    #[tokio::test]
    async fn test_warmup_then_upcoming() {
        let state = AppState::new(Arc::new(TwoPages), Arc::new(MemoryCache::new()));

        let report = state.warmer.warm().await.unwrap();
        report.tasks.join().await;

        let response = upcoming_handler(State(state)).await.unwrap();
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[1].genres[0].name, "Adventure");
    }

    #[tokio::test]
    async fn test_warmup_handler_reports_pages() {
        let state = AppState::new(Arc::new(TwoPages), Arc::new(MemoryCache::new()));

        let response = warmup_handler(State(state.clone())).await.unwrap();

        assert_eq!(response.total_pages, 2);
        assert_eq!(response.fetched, 2);
        assert!(response.failed_page.is_none());
        assert!(state.aggregator.state().is_ready());
    }

    #[tokio::test]
    async fn test_warmup_handler_surfaces_fetch_error() {
        let state = AppState::new(Arc::new(Offline), Arc::new(MemoryCache::new()));

        let result = warmup_handler(State(state)).await;
        assert!(matches!(result, Err(AppError::Warmup(_))));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let state = AppState::new(Arc::new(TwoPages), Arc::new(MemoryCache::new()));

        let response = health_handler(State(state)).await;
        assert_eq!(response.status, "healthy");
        assert!(!response.ready);
    }
}
