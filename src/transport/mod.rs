//! Transport Module
//!
//! The unary call primitive the caching interceptor forwards to, and an
//! HTTP implementation of it.

mod http;

use std::sync::Arc;

use crate::error::TransportError;

pub use http::HttpTransport;

// == Transport Trait ==
/// Synchronous unary call primitive owned by the RPC layer.
///
/// Takes the fully-qualified method name and the serialized request, and
/// returns the serialized response. Connection handling, wire protocol and
/// retries are the implementation's business.
pub trait Transport: Send + Sync {
    fn invoke(&self, method: &str, request: &[u8]) -> Result<Vec<u8>, TransportError>;
}

// == Function Transport ==
/// A [`Transport`] backed by a closure. See [`transport_fn`].
#[derive(Clone)]
pub struct TransportFn<F> {
    f: F,
}

/// Wraps a closure as a [`Transport`].
pub fn transport_fn<F>(f: F) -> TransportFn<F>
where
    F: Fn(&str, &[u8]) -> Result<Vec<u8>, TransportError> + Send + Sync,
{
    TransportFn { f }
}

impl<F> Transport for TransportFn<F>
where
    F: Fn(&str, &[u8]) -> Result<Vec<u8>, TransportError> + Send + Sync,
{
    fn invoke(&self, method: &str, request: &[u8]) -> Result<Vec<u8>, TransportError> {
        (self.f)(method, request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn invoke(&self, method: &str, request: &[u8]) -> Result<Vec<u8>, TransportError> {
        (**self).invoke(method, request)
    }
}
