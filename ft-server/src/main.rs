use ft_server::{AppState, Config, Metrics, build_router, logger};

use ft_auth::{AccessGuard, ClientRateLimiter};
use ft_store::RecordStore;

use std::error::Error;
use std::net::SocketAddr;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::from_env()?;

    // Initialize logger (before any other logging)
    logger::initialize(config.log_level, config.log_colored)?;

    info!("Starting ft-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the record store (corrupt or missing snapshots are recovered,
    // never fatal)
    let store = RecordStore::open(&config.data_file);

    // Build application state
    let state = AppState {
        store,
        guard: AccessGuard::new(config.api_secret.as_str()),
        limiter: ClientRateLimiter::new(config.rate_limit.clone()),
        metrics: Metrics::new(),
    };

    // Build router
    let app = build_router(state);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown; peer addresses feed the limiter
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
