//! Search backend server binary.
//!
//! Loads configuration, starts the HTTP server and runs until Ctrl-C.
//! Log verbosity follows `RUST_LOG` (default `info`).

use myassistant::{SearchServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::load().map_err(|e| {
        tracing::error!(error = %e, "failed to load configuration");
        anyhow::anyhow!("configuration error: {e}")
    })?;

    let server = SearchServer::start(&config)
        .await
        .map_err(|e| anyhow::anyhow!("server failed to start: {e}"))?;

    tracing::info!(port = server.port(), "myassistant-server ready");

    tokio::signal::ctrl_c().await?;

    tracing::info!("shutting down");
    server.shutdown();
    Ok(())
}
