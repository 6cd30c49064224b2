//! Request and Response models
//!
//! DTOs for the gateway HTTP API and the greeter messages.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{HelloRequest, SendRequest};
pub use responses::{HealthResponse, HelloReply, SendResponse, StatsResponse};
