//! Cache Module
//!
//! Provides an in-memory response store bounded by total byte size, with
//! LRU eviction and a thread-safe shared handle.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::{CacheEntry, CacheKey};
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::{CacheHandle, CacheStore};

// == Public Constants ==
/// Default cache capacity in bytes
pub const DEFAULT_CAPACITY_BYTES: usize = 1024 * 1024; // 1 MB
