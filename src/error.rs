//! Error types for the caching interceptor and the demo gateway
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Transport Error Enum ==
/// Failure reported by the underlying unary call primitive.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The remote endpoint could not be reached
    #[error("Connection failed: {0}")]
    Connect(String),

    /// The call did not complete within its deadline
    #[error("Call timed out")]
    Timeout,

    /// The call was cancelled before completing
    #[error("Call cancelled")]
    Cancelled,

    /// The server answered with a failure status
    #[error("Server returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// Any other transport failure
    #[error("Transport error: {0}")]
    Other(String),
}

// == Cache Error Enum ==
/// Unified error type surfaced at the interceptor boundary.
#[derive(Error, Debug)]
pub enum CacheError {
    /// `only_if_cached` was requested and no entry exists
    #[error("Unsatisfiable request (only-if-cached): {method} is not cached")]
    NotCached { method: String },

    /// `no_cache` and `only_if_cached` were both requested
    #[error("Conflicting directives: no-cache and only-if-cached cannot be combined")]
    ConflictingDirectives,

    /// The underlying call failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A message could not be serialized or deserialized
    #[error("Codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotCached { .. } => StatusCode::GATEWAY_TIMEOUT,
            CacheError::ConflictingDirectives => StatusCode::BAD_REQUEST,
            CacheError::Transport(_) => StatusCode::BAD_GATEWAY,
            CacheError::Codec(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for cached calls.
pub type Result<T> = std::result::Result<T, CacheError>;
