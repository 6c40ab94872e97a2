//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;

/// Default TMDB API root.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// TMDB API key sent with every upstream request
    pub api_key: String,
    /// Root URL of the upstream API
    pub base_url: String,
    /// Language/locale sent with every upstream request
    pub language: String,
    /// Upstream request timeout in seconds
    pub request_timeout: u64,
    /// Redis connection URL; the in-memory cache is used when unset
    pub redis_url: Option<String>,
    /// HTTP server port
    pub server_port: u16,
    /// Seconds between warm-up runs, 0 warms once at startup
    pub refresh_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `TMDB_API_KEY` - Upstream API key (default: empty)
    /// - `TMDB_BASE_URL` - Upstream API root (default: https://api.themoviedb.org/3)
    /// - `TMDB_LANGUAGE` - Upstream locale (default: en-US)
    /// - `TMDB_TIMEOUT_SECS` - Upstream request timeout (default: 10)
    /// - `REDIS_URL` - Redis URL (default: unset, in-memory cache)
    /// - `SERVER_PORT` - HTTP server port (default: 1323)
    /// - `REFRESH_INTERVAL` - Warm-up interval in seconds (default: 0)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_key: env::var("TMDB_API_KEY").unwrap_or(defaults.api_key),
            base_url: env::var("TMDB_BASE_URL").unwrap_or(defaults.base_url),
            language: env::var("TMDB_LANGUAGE").unwrap_or(defaults.language),
            request_timeout: env::var("TMDB_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout),
            redis_url: env::var("REDIS_URL").ok().filter(|v| !v.is_empty()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            refresh_interval: env::var("REFRESH_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_interval),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            language: "en-US".to_string(),
            request_timeout: 10,
            redis_url: None,
            server_port: 1323,
            refresh_interval: 0,
        }
    }
}
