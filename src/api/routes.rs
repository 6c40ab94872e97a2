//! API Routes
//!
//! Configures the Axum router with all endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health_handler, upcoming_handler, warmup_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(upcoming_handler))
        .route("/warmup", post(warmup_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::cache::{Cache, MemoryCache};
    use crate::error::FetchError;
    use crate::tmdb::{Genre, MovieSource, UpcomingPage};

    struct EmptySource;

    #[async_trait]
    impl MovieSource for EmptySource {
        async fn fetch_page(&self, page: u32) -> Result<UpcomingPage, FetchError> {
            Ok(UpcomingPage {
                page,
                total_pages: 1,
                ..Default::default()
            })
        }

        async fn fetch_genres(&self) -> Result<Vec<Genre>, FetchError> {
            Ok(Vec::new())
        }
    }

    fn create_test_app(cache: MemoryCache) -> (Router, AppState) {
        let state = AppState::new(Arc::new(EmptySource), Arc::new(cache));
        (create_router(state.clone()), state)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (app, _) = create_test_app(MemoryCache::new());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_upcoming_endpoint_cold() {
        let (app, _) = create_test_app(MemoryCache::new());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_warmup_endpoint() {
        let (app, _) = create_test_app(MemoryCache::new());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/warmup")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_page_is_server_error() {
        let cache = MemoryCache::new();
        let (app, state) = create_test_app(cache.clone());
        state.warmer.warm().await.unwrap().tasks.join().await;
        cache.set("upcoming/1", "not json".to_string()).await.unwrap();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
