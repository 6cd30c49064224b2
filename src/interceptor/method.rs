//! Typed method descriptors.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// A unary method identified by its fully-qualified name, typed by its
/// request and response messages.
///
/// Messages are serialized as JSON. The serialized request bytes are what
/// the cache key is derived from.
pub struct MethodDescriptor<Req, Resp> {
    full_name: &'static str,
    _messages: PhantomData<fn(Req) -> Resp>,
}

impl<Req, Resp> MethodDescriptor<Req, Resp> {
    /// Creates a descriptor for `package.Service/Method`.
    pub const fn new(full_name: &'static str) -> Self {
        Self {
            full_name,
            _messages: PhantomData,
        }
    }

    pub fn full_name(&self) -> &'static str {
        self.full_name
    }
}

impl<Req: Serialize, Resp: DeserializeOwned> MethodDescriptor<Req, Resp> {
    pub fn serialize_request(&self, request: &Req) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(request)?)
    }

    pub fn deserialize_response(&self, bytes: &[u8]) -> Result<Resp> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl<Req, Resp> Clone for MethodDescriptor<Req, Resp> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Req, Resp> Copy for MethodDescriptor<Req, Resp> {}

impl<Req, Resp> fmt::Debug for MethodDescriptor<Req, Resp> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDescriptor")
            .field("full_name", &self.full_name)
            .finish()
    }
}
