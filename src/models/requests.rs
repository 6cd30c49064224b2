//! Request DTOs
//!
//! Defines the gateway request body and the greeter request message.

use serde::{Deserialize, Serialize};

/// Request body for the gateway send operation (POST /send)
///
/// Mirrors the demo form: backend address, message, and the three cache
/// switches. `use_get` marks the call as safe and therefore cacheable.
#[derive(Debug, Clone, Deserialize)]
pub struct SendRequest {
    /// Greeter backend host
    pub host: String,
    /// Greeter backend port
    pub port: u16,
    /// Name sent in the greeting request
    pub message: String,
    /// Issue the call as a safe (cacheable) call
    #[serde(default)]
    pub use_get: bool,
    /// Skip the cached response
    #[serde(default)]
    pub no_cache: bool,
    /// Answer from the cache only
    #[serde(default)]
    pub only_if_cached: bool,
}

impl SendRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.host.trim().is_empty() {
            return Some("Host cannot be empty".to_string());
        }
        if self.port == 0 {
            return Some("Port must be between 1 and 65535".to_string());
        }
        None
    }
}

/// Greeter request message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloRequest {
    pub name: String,
}
