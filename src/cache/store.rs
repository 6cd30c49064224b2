//! Cache Store Module
//!
//! Byte-bounded response store with LRU eviction, and the shared handle
//! through which concurrent calls access it.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::{CacheEntry, CacheKey, CacheStats, LruTracker};

// == Cache Store ==
/// Response storage bounded by the total size of its entries.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-entry storage
    entries: HashMap<CacheKey, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker<CacheKey>,
    /// Performance statistics
    stats: CacheStats,
    /// Sum of the sizes of all held entries
    size_bytes: usize,
    /// Maximum aggregate size of held entries
    capacity_bytes: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore holding at most `capacity_bytes` of responses.
    ///
    /// A capacity of zero is raised to one byte.
    pub fn new(capacity_bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            size_bytes: 0,
            capacity_bytes: capacity_bytes.max(1),
        }
    }

    // == Get ==
    /// Returns the entry for `key`, marking it most recently used.
    pub fn get(&mut self, key: &CacheKey) -> Option<CacheEntry> {
        match self.entries.get(key) {
            Some(entry) => {
                let entry = entry.clone();
                self.lru.touch(key);
                self.stats.record_hit();
                Some(entry)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Stores `entry` under `key`, replacing any previous entry.
    ///
    /// Least recently used entries are evicted until the new entry fits.
    /// An entry larger than the whole capacity is not stored, and any
    /// previous entry for the same key is dropped with it.
    pub fn put(&mut self, key: CacheKey, entry: CacheEntry) {
        self.remove(&key);

        if entry.size_bytes() > self.capacity_bytes {
            debug!(
                method = key.method(),
                size = entry.size_bytes(),
                capacity = self.capacity_bytes,
                "Entry exceeds cache capacity, not stored"
            );
            self.stats.record_rejection();
            return;
        }

        while self.size_bytes + entry.size_bytes() > self.capacity_bytes {
            let Some(evicted_key) = self.lru.evict_oldest() else {
                break;
            };
            if let Some(evicted) = self.entries.remove(&evicted_key) {
                self.size_bytes -= evicted.size_bytes();
                self.stats.record_eviction();
                debug!(
                    method = evicted_key.method(),
                    size = evicted.size_bytes(),
                    "Evicted least recently used entry"
                );
            }
        }

        self.size_bytes += entry.size_bytes();
        self.lru.touch(&key);
        self.entries.insert(key, entry);
    }

    // == Remove ==
    /// Removes the entry for `key`, returning it if present.
    pub fn remove(&mut self, key: &CacheKey) -> Option<CacheEntry> {
        let entry = self.entries.remove(key)?;
        self.lru.remove(key);
        self.size_bytes -= entry.size_bytes();
        Some(entry)
    }

    // == Contains ==
    /// Checks for `key` without affecting recency or statistics.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    // == Clear ==
    /// Drops every entry. Statistics counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
        self.size_bytes = 0;
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.total_entries = self.entries.len();
        stats.size_bytes = self.size_bytes;
        stats.capacity_bytes = self.capacity_bytes;
        stats
    }

    /// Returns the sum of the sizes of all held entries.
    pub fn size_bytes(&self) -> usize {
        self.size_bytes
    }

    /// Returns the configured capacity.
    pub fn capacity_bytes(&self) -> usize {
        self.capacity_bytes
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Cache Handle ==
/// Shared, thread-safe handle to a [`CacheStore`].
///
/// Clones refer to the same store. Every operation takes the store lock for
/// its whole duration, so concurrent callers never observe a partial update.
#[derive(Debug, Clone)]
pub struct CacheHandle {
    inner: Arc<Mutex<CacheStore>>,
}

impl CacheHandle {
    // == Constructor ==
    /// Creates a new store with the given capacity and returns a handle to it.
    pub fn new(capacity_bytes: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CacheStore::new(capacity_bytes))),
        }
    }

    // == Get ==
    /// Returns the entry for `key`, marking it most recently used.
    pub fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.inner.lock().get(key)
    }

    // == Put ==
    /// Stores `entry` under `key`, evicting as needed.
    pub fn put(&self, key: CacheKey, entry: CacheEntry) {
        self.inner.lock().put(key, entry)
    }

    // == Contains ==
    /// Checks for `key` without touching recency or stats.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.inner.lock().contains(key)
    }

    // == Clear ==
    /// Drops every entry.
    pub fn clear(&self) {
        self.inner.lock().clear()
    }

    // == Stats ==
    /// Returns a snapshot of the store's statistics.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    // == Size ==
    /// Returns the total size of the held entries.
    pub fn size_bytes(&self) -> usize {
        self.inner.lock().size_bytes()
    }

    // == Capacity ==
    /// Returns the configured capacity.
    pub fn capacity_bytes(&self) -> usize {
        self.inner.lock().capacity_bytes()
    }

    // == Length ==
    /// Returns the number of held entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    // == Is Empty ==
    /// Returns true if the store holds nothing.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
