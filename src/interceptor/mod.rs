//! Interceptor Module
//!
//! Response caching for unary calls explicitly marked safe.
//!
//! # Directives
//! - `safe` - the call may be answered from, and stored in, the cache
//! - `no_cache` - skip the cached response but store the fresh one
//! - `only_if_cached` - answer from the cache or fail without a network call

mod caching;
mod method;
mod options;

pub use caching::{CachedChannel, CachingInterceptor};
pub use method::MethodDescriptor;
pub use options::CallOptions;
