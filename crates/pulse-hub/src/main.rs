//! Telemetry hub entry point for the Pulse sink.
//!
//! The hub is the process root: it owns the event store for the life of
//! the process, wires it into the HTTP layer, and serves until
//! terminated. All stored state is volatile -- a restart starts from an
//! empty sequence.
//!
//! # Architecture
//!
//! ```text
//! HTTP ingest --> Event Store (append-only) --> summary fold / WebSocket fan-out
//! ```

use pulse_api::{start_server, AppState, ServerConfig, ServerError};
use pulse_core::EventStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// Initializes logging, loads the listen address from environment
/// variables, constructs the event store, and runs the HTTP server
/// indefinitely.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the server cannot
/// bind to its address.
#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("pulse-hub starting");

    // Load configuration from environment
    let config = ServerConfig::from_env()?;
    info!(host = config.host, port = config.port, "configuration loaded");

    // The store is created here, owned by the process root, and torn
    // down only at process exit. No reset operation exists.
    let store = EventStore::new();
    let state = AppState::new(store);

    info!("event store initialized, starting server");
    start_server(&config, state).await
}
