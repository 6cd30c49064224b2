//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and evictions.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of lookups that found an entry
    pub hits: u64,
    /// Number of lookups that found nothing
    pub misses: u64,
    /// Number of entries evicted to make room for newer ones
    pub evictions: u64,
    /// Number of inserts dropped because the entry exceeded total capacity
    pub rejected: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Sum of the sizes of the entries currently held
    pub size_bytes: usize,
    /// Configured maximum aggregate size
    pub capacity_bytes: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Recording ==
    /// Records a lookup that found an entry.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Records a lookup that found nothing.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Records an entry evicted for space.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Records an entry too large to store.
    pub fn record_rejection(&mut self) {
        self.rejected += 1;
    }
}
