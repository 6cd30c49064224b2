//! Response DTOs
//!
//! Defines the gateway response bodies and the greeter reply message.

use serde::{Deserialize, Serialize};

use crate::cache::CacheStats;

/// Response body for the gateway send operation (POST /send)
#[derive(Debug, Clone, Serialize)]
pub struct SendResponse {
    /// Greeting returned by the backend (or by the cache)
    pub message: String,
}

impl SendResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Number of responses too large to cache
    pub rejected: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Bytes currently held
    pub size_bytes: usize,
    /// Configured capacity in bytes
    pub capacity_bytes: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            rejected: stats.rejected,
            total_entries: stats.total_entries,
            size_bytes: stats.size_bytes,
            capacity_bytes: stats.capacity_bytes,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Greeter reply message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloReply {
    pub message: String,
}
