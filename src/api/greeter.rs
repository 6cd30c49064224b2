//! Greeter Backend
//!
//! A minimal unary RPC server answering `helloworld.Greeter/SayHello` as
//! JSON over HTTP. It is the backend the demo gateway calls through the cache.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::info;

use crate::interceptor::MethodDescriptor;
use crate::models::{HelloReply, HelloRequest};

/// The greeting method.
pub const SAY_HELLO: MethodDescriptor<HelloRequest, HelloReply> =
    MethodDescriptor::new("helloworld.Greeter/SayHello");

/// Greeter server state.
///
/// Counts handled calls so cache behavior is observable from the server side.
#[derive(Debug, Clone, Default)]
pub struct GreeterState {
    calls: Arc<AtomicU64>,
}

impl GreeterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of SayHello calls served.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Handler for POST /rpc/helloworld.Greeter/SayHello
pub async fn say_hello_handler(
    State(state): State<GreeterState>,
    Json(req): Json<HelloRequest>,
) -> Json<HelloReply> {
    let served = state.calls.fetch_add(1, Ordering::SeqCst) + 1;
    info!(name = %req.name, served, "SayHello");

    Json(HelloReply {
        message: format!("Hello {}", req.name),
    })
}
