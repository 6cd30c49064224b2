//! Safecall Cache demo
//!
//! Runs a greeter backend and a gateway that calls it through the response
//! cache, so the cache directives can be exercised over HTTP.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use safecall_cache::api::{create_greeter_router, create_router, GreeterState};
use safecall_cache::{AppState, Config};

/// Main entry point for the demo.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Start the greeter backend on its configured port
/// 4. Create the shared response cache and the gateway router
/// 5. Serve the gateway until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "safecall_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Safecall Cache demo");

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_size_bytes={}, port={}, greeter_port={}, request_timeout={}s",
        config.cache_size_bytes,
        config.server_port,
        config.greeter_port,
        config.request_timeout_secs
    );

    let greeter_addr = SocketAddr::from(([0, 0, 0, 0], config.greeter_port));
    let greeter_listener = TcpListener::bind(greeter_addr)
        .await
        .with_context(|| format!("Failed to bind greeter backend on {}", greeter_addr))?;
    let greeter = tokio::spawn(async move {
        axum::serve(greeter_listener, create_greeter_router(GreeterState::new())).await
    });
    info!("Greeter backend listening on http://{}", greeter_addr);

    let state = AppState::from_config(&config);
    info!(
        capacity_bytes = state.cache().capacity_bytes(),
        "Response cache initialized"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind gateway on {}", addr))?;
    info!("Gateway listening on http://{}", addr);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Gateway server failed")?;

    greeter.abort();
    info!("Shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
