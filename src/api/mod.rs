//! API Module
//!
//! HTTP handlers and routing for the movies cache.
//!
//! # Endpoints
//! - `GET /` - Merged upcoming listing from cache
//! - `POST /warmup` - Run a warm-up cycle
//! - `GET /health` - Health and readiness

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
