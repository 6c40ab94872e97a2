//! Cache Statistics Module
//!
//! Tracks cache traffic for the in-memory backend.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache traffic counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of reads that found a value
    pub hits: u64,
    /// Number of reads that found nothing
    pub misses: u64,
    /// Number of writes
    pub writes: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Reads ==
    /// Total number of reads, hits and misses alike.
    pub fn reads(&self) -> u64 {
        self.hits + self.misses
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.reads();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_write(&mut self) {
        self.writes += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
