//! Redis Cache Module
//!
//! Redis-backed implementation of the cache capability.

use std::fmt;

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};
use tracing::{debug, info, warn};

use crate::cache::Cache;
use crate::error::CacheError;

/// Shared Redis cache client.
///
/// Uses a `ConnectionManager`, which reconnects on failure and is cheap to clone.
#[derive(Clone)]
pub struct RedisCache {
    conn_manager: ConnectionManager,
    redis_url: String,
}

impl fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisCache")
            .field("redis_url", &self.redis_url)
            .finish_non_exhaustive()
    }
}

impl RedisCache {
    /// Opens a managed connection to the Redis server at `redis_url`.
    pub async fn connect(redis_url: &str) -> Result<Self, CacheError> {
        info!("Connecting to Redis at {}", redis_url);
        let client = redis::Client::open(redis_url)?;
        let conn_manager = ConnectionManager::new(client).await?;

        Ok(Self {
            conn_manager,
            redis_url: redis_url.to_string(),
        })
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.conn_manager.clone();
        match conn.get::<_, Option<String>>(key).await {
            Ok(value) => {
                debug!("cache.get({}) hit={}", key, value.is_some());
                Ok(value)
            }
            Err(e) => {
                warn!("Redis GET failed for key {}: {}", key, e);
                Err(e.into())
            }
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CacheError> {
        let mut conn = self.conn_manager.clone();
        debug!("cache.set({})", key);
        conn.set::<_, _, ()>(key, value).await.map_err(|e| {
            warn!("Redis SET failed for key {}: {}", key, e);
            CacheError::from(e)
        })
    }
}
