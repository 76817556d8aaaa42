use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_relay::{AppState, RelayConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Refuse to start without a usable upstream.
    let config = RelayConfig::from_env()
        .inspect_err(|err| tracing::error!(error = %err, "Invalid configuration"))?;

    tracing::info!(
        upstream = %config.base_url,
        listen_addr = %config.listen_addr,
        "Configuration loaded"
    );

    let state = AppState::new(&config)?;
    let listener = TcpListener::bind(config.listen_addr).await?;

    todo_relay::run(listener, state).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
