//! Per-call cache directives.

/// Options supplied by the caller for a single call.
///
/// `safe` marks this invocation as free of side effects and therefore
/// eligible for caching. It is set per call, so the same method can be
/// invoked cacheably and non-cacheably in one process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// The invocation is side-effect free and may be cached
    pub safe: bool,
    /// Do not reuse a cached response; the fresh response is still stored
    pub no_cache: bool,
    /// Never contact the network; answer from the cache or fail
    pub only_if_cached: bool,
}

impl CallOptions {
    /// Options for a plain, uncached call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a cacheable call with no extra directives.
    pub fn safe() -> Self {
        Self {
            safe: true,
            ..Self::default()
        }
    }

    /// Sets the `no_cache` directive.
    pub fn with_no_cache(mut self, no_cache: bool) -> Self {
        self.no_cache = no_cache;
        self
    }

    /// Sets the `only_if_cached` directive.
    pub fn with_only_if_cached(mut self, only_if_cached: bool) -> Self {
        self.only_if_cached = only_if_cached;
        self
    }
}
