//! Configuration Module
//!
//! Handles loading and managing demo configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_CAPACITY_BYTES;

/// Demo configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum aggregate size of cached responses in bytes
    pub cache_size_bytes: usize,
    /// Gateway HTTP port
    pub server_port: u16,
    /// Greeter backend HTTP port
    pub greeter_port: u16,
    /// Per-call transport timeout in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_SIZE_BYTES` - Cache capacity in bytes (default: 1048576)
    /// - `SERVER_PORT` - Gateway HTTP port (default: 3000)
    /// - `GREETER_PORT` - Greeter backend HTTP port (default: 50051)
    /// - `REQUEST_TIMEOUT_SECS` - Per-call transport timeout (default: 5)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_size_bytes: parse_env("CACHE_SIZE_BYTES").unwrap_or(defaults.cache_size_bytes),
            server_port: parse_env("SERVER_PORT").unwrap_or(defaults.server_port),
            greeter_port: parse_env("GREETER_PORT").unwrap_or(defaults.greeter_port),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS")
                .unwrap_or(defaults.request_timeout_secs),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_size_bytes: DEFAULT_CAPACITY_BYTES,
            server_port: 3000,
            greeter_port: 50051,
            request_timeout_secs: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_size_bytes, 1024 * 1024);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.greeter_port, 50051);
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("CACHE_SIZE_BYTES");
        env::remove_var("SERVER_PORT");
        env::remove_var("GREETER_PORT");
        env::remove_var("REQUEST_TIMEOUT_SECS");

        let config = Config::from_env();
        assert_eq!(config.cache_size_bytes, DEFAULT_CAPACITY_BYTES);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.greeter_port, 50051);
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        env::set_var("SAFECALL_TEST_GARBAGE", "not-a-number");
        assert_eq!(parse_env::<u16>("SAFECALL_TEST_GARBAGE"), None);
        env::remove_var("SAFECALL_TEST_GARBAGE");
    }
}
