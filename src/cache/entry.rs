//! Cache Entry Module
//!
//! Defines the cache key and the stored response entry.

use std::sync::Arc;

// == Cache Key ==
/// Identifies a cached response by method name and serialized request.
///
/// Two calls with the same fully-qualified method name and byte-identical
/// serialized requests produce equal keys. The full request bytes are kept
/// rather than a digest, so distinct requests never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Fully-qualified method name, e.g. `helloworld.Greeter/SayHello`
    method: Arc<str>,
    /// Serialized request payload
    request: Arc<[u8]>,
}

impl CacheKey {
    // == Constructor ==
    /// Creates a key from a method name and the serialized request bytes.
    pub fn new(method: &str, request: &[u8]) -> Self {
        Self {
            method: Arc::from(method),
            request: Arc::from(request),
        }
    }

    /// Returns the fully-qualified method name.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the serialized request bytes.
    pub fn request(&self) -> &[u8] {
        &self.request
    }
}

// == Cache Entry ==
/// A stored response payload with its size accounting value.
///
/// Entries are immutable; cloning shares the underlying bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// Serialized response payload
    response: Arc<[u8]>,
    /// Bytes charged against the store capacity
    size_bytes: usize,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry charged at the length of the response.
    pub fn new(response: impl Into<Arc<[u8]>>) -> Self {
        let response = response.into();
        let size_bytes = response.len();
        Self {
            response,
            size_bytes,
        }
    }

    /// Returns the serialized response bytes.
    pub fn response(&self) -> &[u8] {
        &self.response
    }

    /// Consumes the entry, returning the shared response bytes.
    pub fn into_response(self) -> Arc<[u8]> {
        self.response
    }

    /// Returns the size charged for this entry.
    pub fn size_bytes(&self) -> usize {
        self.size_bytes
    }
}
