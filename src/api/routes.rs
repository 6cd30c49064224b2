//! API Routes
//!
//! Configures the Axum routers for the gateway and the greeter backend.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::greeter::{say_hello_handler, GreeterState, SAY_HELLO};
use super::handlers::{health_handler, send_handler, stats_handler, AppState};

/// Creates the gateway router.
///
/// # Endpoints
/// - `POST /send` - Send a greeting through the response cache
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/send", post(send_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Creates the greeter backend router.
///
/// # Endpoints
/// - `POST /rpc/helloworld.Greeter/SayHello` - Unary greeting
/// - `GET /health` - Health check endpoint
pub fn create_greeter_router(state: GreeterState) -> Router {
    Router::new()
        .route(&format!("/rpc/{}", SAY_HELLO.full_name()), post(say_hello_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
