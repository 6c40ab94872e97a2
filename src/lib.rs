//! Movies Cache - A warm cache in front of the TMDB upcoming listing
//!
//! Warms a key/value cache with every upcoming page, enriched with genre
//! names, and serves the merged listing from that cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;
pub mod tmdb;
pub mod warmup;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_refresh_task;
