//! Pulse HTTP server configuration and lifecycle management.
//!
//! [`ServerConfig`] is the single listen-address configuration for the
//! sink, loaded from the environment by the hub binary. [`start_server`]
//! binds to it and runs the Axum server until the process is terminated.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Configuration for the Pulse server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `PULSE_HOST` -- bind address (default `0.0.0.0`)
    /// - `PULSE_PORT` -- listen port (default `8080`)
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] if `PULSE_PORT` is set but is not
    /// a valid port number.
    pub fn from_env() -> Result<Self, ServerError> {
        let host = std::env::var("PULSE_HOST").unwrap_or_else(|_| String::from("0.0.0.0"));

        let port: u16 = std::env::var("PULSE_PORT")
            .unwrap_or_else(|_| String::from("8080"))
            .parse()
            .map_err(|e| ServerError::Config(format!("invalid PULSE_PORT: {e}")))?;

        Ok(Self { host, port })
    }

    /// The socket address this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Bind`] if the host/port pair does not form
    /// a valid socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ServerError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ServerError::Bind(format!("invalid address: {e}")))
    }
}

/// Start the Pulse HTTP server.
///
/// Binds to the configured address, builds the router, and serves
/// requests until the process is terminated. Returns `Ok(())` on
/// clean shutdown, or an error if binding or serving fails.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind or the server
/// encounters a fatal I/O error.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), ServerError> {
    let addr = config.bind_addr()?;

    let router = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    info!(%addr, "Pulse server listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    Ok(())
}

/// Errors that can occur when configuring or running the Pulse server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable held an unusable value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn from_env_falls_back_to_defaults() {
        temp_env::with_vars([("PULSE_HOST", None::<&str>), ("PULSE_PORT", None)], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config, ServerConfig::default());
        });
    }

    #[test]
    fn from_env_reads_overrides() {
        temp_env::with_vars(
            [("PULSE_HOST", Some("127.0.0.1")), ("PULSE_PORT", Some("9901"))],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.host, "127.0.0.1");
                assert_eq!(config.port, 9901);
            },
        );
    }

    #[test]
    fn from_env_rejects_garbage_port() {
        temp_env::with_var("PULSE_PORT", Some("not-a-port"), || {
            let result = ServerConfig::from_env();
            assert!(matches!(result, Err(ServerError::Config(_))));
        });
    }

    #[test]
    fn bind_addr_rejects_unparseable_host() {
        let config = ServerConfig {
            host: String::from("not a host"),
            port: 8080,
        };
        assert!(matches!(config.bind_addr(), Err(ServerError::Bind(_))));
    }
}
