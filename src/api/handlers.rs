//! API Handlers
//!
//! HTTP request handlers for the demo gateway endpoints.

use std::time::Duration;

use axum::{extract::State, Json};
use tracing::{info, warn};

use crate::api::greeter::SAY_HELLO;
use crate::cache::CacheHandle;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::interceptor::{CachingInterceptor, CallOptions};
use crate::models::{
    HealthResponse, HelloReply, HelloRequest, SendRequest, SendResponse, StatsResponse,
};
use crate::transport::HttpTransport;

/// Application state shared across all gateway handlers.
///
/// Holds the interceptor, and through it the response cache shared by every
/// call the gateway makes.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Caching interceptor wrapping each per-request transport
    pub interceptor: CachingInterceptor,
    /// Per-call transport timeout
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: CacheHandle, request_timeout: Duration) -> Self {
        Self {
            interceptor: CachingInterceptor::new(cache),
            request_timeout,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            CacheHandle::new(config.cache_size_bytes),
            config.request_timeout(),
        )
    }

    pub fn cache(&self) -> &CacheHandle {
        self.interceptor.cache()
    }
}

/// Handler for POST /send
///
/// Sends a greeting to the requested backend through the response cache.
/// The blocking call runs on the blocking thread pool.
pub async fn send_handler(
    State(state): State<AppState>,
    Json(req): Json<SendRequest>,
) -> Result<Json<SendResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let interceptor = state.interceptor.clone();
    let timeout = state.request_timeout;
    let reply = tokio::task::spawn_blocking(move || say_hello(&interceptor, &req, timeout))
        .await
        .map_err(|e| CacheError::Internal(format!("Call task failed: {}", e)))??;

    Ok(Json(SendResponse::new(reply.message)))
}

/// Performs SayHello against `req.host:req.port`.
///
/// A fresh transport is built per request; the cache is the interceptor's.
fn say_hello(
    interceptor: &CachingInterceptor,
    req: &SendRequest,
    timeout: Duration,
) -> Result<HelloReply> {
    let transport = HttpTransport::new(&req.host, req.port, timeout)?;
    let channel = interceptor.intercept(transport);

    let options = if req.use_get {
        CallOptions::safe()
            .with_no_cache(req.no_cache)
            .with_only_if_cached(req.only_if_cached)
    } else {
        CallOptions::new()
    };

    let request = HelloRequest {
        name: req.message.clone(),
    };

    match channel.unary_call(&SAY_HELLO, &request, options) {
        Ok(reply) => {
            info!(host = %req.host, port = req.port, ?options, "RPC succeeded");
            Ok(reply)
        }
        Err(e) => {
            warn!(host = %req.host, port = req.port, ?options, error = %e, "RPC failed");
            Err(e)
        }
    }
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache().stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
