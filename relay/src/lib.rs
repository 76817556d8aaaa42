//! Pass-through HTTP relay for the upstream Todo service.
//!
//! # Overview
//! Serves `/api/TodoItems` and forwards every call, one inbound request to
//! one outbound request, to the upstream service named in `RelayConfig`.
//! Upstream statuses are translated back by `RelayError`.
//!
//! # Design
//! - `todo_core::TodoClient` builds and parses upstream messages; this crate
//!   only performs the I/O (`upstream`) and the HTTP surface (`routes`).
//! - No retries, timeouts, or caching: the relay holds no state besides the
//!   pooled client.

pub mod config;
pub mod error;
pub mod routes;
pub mod upstream;

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, RelayConfig};
pub use error::RelayError;
pub use routes::AppState;
pub use upstream::Upstream;

pub fn app(state: AppState) -> Router {
    routes::router(state).layer(TraceLayer::new_for_http())
}

/// Serves until Ctrl+C, then drains in-flight requests.
pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    serve_with_shutdown(listener, state, shutdown_signal()).await
}

pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    state: AppState,
    signal: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(address = %addr, "Relay server starting");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(signal)
        .await?;

    tracing::info!("Relay server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
