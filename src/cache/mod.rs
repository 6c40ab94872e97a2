//! Cache Module
//!
//! Key/value capability used by the warm-up pipeline, with an in-memory
//! backend and a Redis backend.

mod memory;
mod redis_cache;
mod stats;

use async_trait::async_trait;

use crate::error::CacheError;

// Re-export public types
pub use memory::{MemoryCache, MemoryStore};
pub use redis_cache::RedisCache;
pub use stats::CacheStats;

// == Cache Trait ==
/// Minimal `Get`/`Set` capability over a shared key/value store.
///
/// Implementations must be safe for concurrent use; the warm-up pipeline
/// shares one instance across background tasks.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Returns the stored value, or `None` on a miss.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Stores `value` under `key` without expiration, overwriting any previous value.
    async fn set(&self, key: &str, value: String) -> Result<(), CacheError>;
}

// == Key Helpers ==
/// Key holding the name of genre `id`.
pub fn genre_key(id: i64) -> String {
    format!("genres/{}", id)
}

/// Key holding the serialized item list of upcoming page `page`.
pub fn page_key(page: u32) -> String {
    format!("upcoming/{}", page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_formats() {
        assert_eq!(genre_key(28), "genres/28");
        assert_eq!(page_key(3), "upcoming/3");
    }
}
