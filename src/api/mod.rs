//! API Module
//!
//! HTTP handlers and routing for the demo gateway and greeter backend.
//!
//! # Gateway Endpoints
//! - `POST /send` - Send a greeting through the response cache
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint
//!
//! # Greeter Endpoints
//! - `POST /rpc/helloworld.Greeter/SayHello` - Unary greeting

pub mod greeter;
pub mod handlers;
pub mod routes;

pub use greeter::{GreeterState, SAY_HELLO};
pub use handlers::*;
pub use routes::{create_greeter_router, create_router};
