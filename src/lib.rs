//! Safecall Cache - client-side response caching for safe unary RPC calls
//!
//! Calls marked safe are answered from a byte-bounded LRU cache when
//! possible, with per-call `no_cache` and `only_if_cached` directives.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod models;
pub mod transport;

pub use api::AppState;
pub use cache::CacheHandle;
pub use config::Config;
pub use error::{CacheError, TransportError};
pub use interceptor::{CachedChannel, CachingInterceptor, CallOptions, MethodDescriptor};
pub use transport::Transport;
