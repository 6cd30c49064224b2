//! Caching Interceptor
//!
//! Decides per call whether a stored response may be reused, and otherwise
//! forwards the call to the transport and stores successful responses.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::cache::{CacheEntry, CacheHandle, CacheKey};
use crate::error::{CacheError, Result};
use crate::interceptor::{CallOptions, MethodDescriptor};
use crate::transport::Transport;

// == Caching Interceptor ==
/// Factory for cached channels sharing one response cache.
#[derive(Debug, Clone)]
pub struct CachingInterceptor {
    cache: CacheHandle,
}

impl CachingInterceptor {
    pub fn new(cache: CacheHandle) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &CacheHandle {
        &self.cache
    }

    /// Places the cache in front of `transport`.
    pub fn intercept<T: Transport>(&self, transport: T) -> CachedChannel<T> {
        CachedChannel {
            cache: self.cache.clone(),
            transport,
        }
    }
}

// == Cached Channel ==
/// A transport with the response cache on its call path.
#[derive(Debug, Clone)]
pub struct CachedChannel<T> {
    cache: CacheHandle,
    transport: T,
}

impl<T: Transport> CachedChannel<T> {
    /// Performs a typed unary call.
    pub fn unary_call<Req, Resp>(
        &self,
        method: &MethodDescriptor<Req, Resp>,
        request: &Req,
        options: CallOptions,
    ) -> Result<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let request = method.serialize_request(request)?;
        let response = self.invoke(method.full_name(), &request, options)?;
        method.deserialize_response(&response)
    }

    /// Performs a unary call on serialized messages.
    ///
    /// Calls not marked safe go straight to the transport and never touch the
    /// cache. Safe calls are answered from the cache unless `no_cache` is set;
    /// on a miss they fail with [`CacheError::NotCached`] when
    /// `only_if_cached` is set, and otherwise reach the transport and store
    /// the response on success.
    pub fn invoke(&self, method: &str, request: &[u8], options: CallOptions) -> Result<Arc<[u8]>> {
        if !options.safe {
            debug!(method, "Call not marked safe, bypassing cache");
            return Ok(Arc::from(self.transport.invoke(method, request)?));
        }

        if options.no_cache && options.only_if_cached {
            return Err(CacheError::ConflictingDirectives);
        }

        let key = CacheKey::new(method, request);

        if !options.no_cache {
            if let Some(entry) = self.cache.get(&key) {
                debug!(method, size = entry.size_bytes(), "Cache hit");
                return Ok(entry.into_response());
            }
            debug!(method, "Cache miss");
        }

        if options.only_if_cached {
            return Err(CacheError::NotCached {
                method: method.to_string(),
            });
        }

        let response: Arc<[u8]> = Arc::from(self.transport.invoke(method, request)?);
        self.cache.put(key, CacheEntry::new(response.clone()));
        debug!(
            method,
            size = response.len(),
            no_cache = options.no_cache,
            "Stored response"
        );

        Ok(response)
    }

    /// Returns the cache this channel reads and writes.
    pub fn cache(&self) -> &CacheHandle {
        &self.cache
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts invocations and answers with a fixed or failing response.
    struct CountingTransport {
        calls: AtomicUsize,
        response: std::result::Result<Vec<u8>, ()>,
    }

    impl CountingTransport {
        fn ok(response: &[u8]) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                response: Ok(response.to_vec()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                response: Err(()),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Transport for CountingTransport {
        fn invoke(&self, _method: &str, _request: &[u8]) -> std::result::Result<Vec<u8>, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response
                .clone()
                .map_err(|_| TransportError::Status {
                    status: 503,
                    message: "unavailable".to_string(),
                })
        }
    }

    const METHOD: &str = "pkg.Svc/Get";

    fn channel(transport: &Arc<CountingTransport>) -> CachedChannel<Arc<CountingTransport>> {
        CachingInterceptor::new(CacheHandle::new(1024)).intercept(transport.clone())
    }

    #[test]
    fn test_safe_miss_calls_transport_and_stores() {
        let transport = CountingTransport::ok(b"fresh");
        let channel = channel(&transport);

        let response = channel.invoke(METHOD, b"req", CallOptions::safe()).unwrap();

        assert_eq!(&*response, b"fresh");
        assert_eq!(transport.calls(), 1);
        assert_eq!(channel.cache().len(), 1);
        let stored = channel.cache().get(&CacheKey::new(METHOD, b"req")).unwrap();
        assert_eq!(stored.response(), b"fresh");
    }

    #[test]
    fn test_safe_hit_skips_transport() {
        let transport = CountingTransport::ok(b"fresh");
        let channel = channel(&transport);

        channel.invoke(METHOD, b"req", CallOptions::safe()).unwrap();
        let second = channel.invoke(METHOD, b"req", CallOptions::safe()).unwrap();

        assert_eq!(&*second, b"fresh");
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn test_different_request_is_a_miss() {
        let transport = CountingTransport::ok(b"fresh");
        let channel = channel(&transport);

        channel.invoke(METHOD, b"req-1", CallOptions::safe()).unwrap();
        channel.invoke(METHOD, b"req-2", CallOptions::safe()).unwrap();

        assert_eq!(transport.calls(), 2);
        assert_eq!(channel.cache().len(), 2);
    }

    #[test]
    fn test_unsafe_call_never_touches_cache() {
        let transport = CountingTransport::ok(b"network");
        let channel = channel(&transport);
        let key = CacheKey::new(METHOD, b"req");
        channel.cache().put(key.clone(), CacheEntry::new(b"cached".to_vec()));
        let before = channel.cache().stats();

        let response = channel.invoke(METHOD, b"req", CallOptions::new()).unwrap();

        assert_eq!(&*response, b"network");
        assert_eq!(transport.calls(), 1);
        let after = channel.cache().stats();
        assert_eq!(after.hits, before.hits);
        assert_eq!(after.misses, before.misses);
        assert_eq!(channel.cache().get(&key).unwrap().response(), b"cached");
    }

    #[test]
    fn test_unsafe_call_ignores_directives() {
        let transport = CountingTransport::ok(b"network");
        let channel = channel(&transport);

        let options = CallOptions::new()
            .with_no_cache(true)
            .with_only_if_cached(true);
        let response = channel.invoke(METHOD, b"req", options).unwrap();

        assert_eq!(&*response, b"network");
        assert_eq!(transport.calls(), 1);
        assert!(channel.cache().is_empty());
    }

    #[test]
    fn test_only_if_cached_miss_fails_without_network() {
        let transport = CountingTransport::ok(b"fresh");
        let channel = channel(&transport);

        let result = channel.invoke(
            METHOD,
            b"req",
            CallOptions::safe().with_only_if_cached(true),
        );

        assert!(matches!(result, Err(CacheError::NotCached { ref method }) if method == METHOD));
        assert_eq!(transport.calls(), 0);
    }

    #[test]
    fn test_only_if_cached_hit_succeeds() {
        let transport = CountingTransport::ok(b"fresh");
        let channel = channel(&transport);

        channel.invoke(METHOD, b"req", CallOptions::safe()).unwrap();
        let response = channel
            .invoke(METHOD, b"req", CallOptions::safe().with_only_if_cached(true))
            .unwrap();

        assert_eq!(&*response, b"fresh");
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn test_no_cache_refreshes_entry() {
        let transport = CountingTransport::ok(b"fresh");
        let channel = channel(&transport);
        let key = CacheKey::new(METHOD, b"req");
        channel.cache().put(key.clone(), CacheEntry::new(b"stale".to_vec()));

        let response = channel
            .invoke(METHOD, b"req", CallOptions::safe().with_no_cache(true))
            .unwrap();

        assert_eq!(&*response, b"fresh");
        assert_eq!(transport.calls(), 1);
        assert_eq!(channel.cache().get(&key).unwrap().response(), b"fresh");
    }

    #[test]
    fn test_conflicting_directives_fail_without_network() {
        let transport = CountingTransport::ok(b"fresh");
        let channel = channel(&transport);
        channel.invoke(METHOD, b"req", CallOptions::safe()).unwrap();

        let options = CallOptions::safe()
            .with_no_cache(true)
            .with_only_if_cached(true);
        let result = channel.invoke(METHOD, b"req", options);

        assert!(matches!(result, Err(CacheError::ConflictingDirectives)));
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn test_transport_failure_is_not_cached() {
        let transport = CountingTransport::failing();
        let channel = channel(&transport);

        let result = channel.invoke(METHOD, b"req", CallOptions::safe());

        assert!(matches!(
            result,
            Err(CacheError::Transport(TransportError::Status { status: 503, .. }))
        ));
        assert!(channel.cache().is_empty());
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn test_typed_call_round_trip() {
        #[derive(serde::Serialize)]
        struct Query {
            id: u32,
        }
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Answer {
            value: String,
        }
        const LOOKUP: MethodDescriptor<Query, Answer> = MethodDescriptor::new("pkg.Svc/Lookup");

        let transport = CountingTransport::ok(br#"{"value":"forty-two"}"#);
        let channel = channel(&transport);

        let first = channel
            .unary_call(&LOOKUP, &Query { id: 42 }, CallOptions::safe())
            .unwrap();
        let second = channel
            .unary_call(&LOOKUP, &Query { id: 42 }, CallOptions::safe())
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(first.value, "forty-two");
        assert_eq!(transport.calls(), 1);
        assert!(channel
            .cache()
            .contains(&CacheKey::new("pkg.Svc/Lookup", br#"{"id":42}"#)));
    }

    #[test]
    fn test_undecodable_response_is_codec_error() {
        const LOOKUP: MethodDescriptor<u32, String> = MethodDescriptor::new("pkg.Svc/Lookup");

        let transport = CountingTransport::ok(b"not json");
        let channel = channel(&transport);

        let result = channel.unary_call(&LOOKUP, &1, CallOptions::safe());
        assert!(matches!(result, Err(CacheError::Codec(_))));
    }
}
