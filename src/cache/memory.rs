//! In-memory Cache Module
//!
//! HashMap-backed cache used by tests and when no Redis URL is configured.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{Cache, CacheStats};
use crate::error::CacheError;

// == Memory Store ==
/// Plain key/value storage with traffic statistics.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Key-value storage
    entries: HashMap<String, String>,
    /// Traffic statistics
    stats: CacheStats,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Stores a key-value pair, overwriting any existing value.
    pub fn set(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
        self.stats.record_write();
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a value by key, recording a hit or a miss.
    pub fn get(&mut self, key: &str) -> Option<String> {
        match self.entries.get(key) {
            Some(value) => {
                self.stats.record_hit();
                Some(value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Returns a copy of all entries, for comparing cache contents.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries.clone()
    }

    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Memory Cache ==
/// Shared handle over a [`MemoryStore`].
///
/// Clones share the same underlying store.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    store: Arc<RwLock<MemoryStore>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    pub async fn snapshot(&self) -> HashMap<String, String> {
        self.store.read().await.snapshot()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        // Write lock: reads update the hit/miss counters
        let value = self.store.write().await.get(key);
        debug!("cache.get({}) hit={}", key, value.is_some());
        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CacheError> {
        debug!("cache.set({})", key);
        self.store.write().await.set(key.to_string(), value);
        Ok(())
    }
}
