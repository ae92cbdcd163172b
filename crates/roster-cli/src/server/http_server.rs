//! Listener binding and the serve loop.

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::server::{Result, ServerError, shutdown_signal};
use crate::{TRACING_TARGET_SERVER_SHUTDOWN, TRACING_TARGET_SERVER_STARTUP};

/// Binds the configured address and serves requests until shutdown.
///
/// The configuration is re-validated here so the server can never start from
/// an unchecked config, even when callers skip [`ServerConfig::validate`].
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the address cannot be
/// bound, or the serve loop ends with an I/O error.
pub async fn serve_http(app: Router, server_config: ServerConfig) -> Result<()> {
    if let Err(validation_error) = server_config.validate() {
        tracing::error!(
            target: TRACING_TARGET_SERVER_STARTUP,
            error = %validation_error,
            "refusing to start with invalid configuration"
        );
        return Err(ServerError::InvalidConfig(validation_error.to_string()));
    }

    let addr = server_config.server_addr();
    let listener = TcpListener::bind(addr).await.map_err(|bind_error| {
        tracing::error!(
            target: TRACING_TARGET_SERVER_STARTUP,
            addr = %addr,
            error = %bind_error,
            "failed to bind listener"
        );
        ServerError::Bind {
            address: addr.to_string(),
            source: bind_error,
        }
    })?;

    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        addr = %addr,
        "listening for connections"
    );

    if server_config.binds_to_all_interfaces() {
        tracing::warn!(
            target: TRACING_TARGET_SERVER_STARTUP,
            "bound to all interfaces, check firewall rules"
        );
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(server_config.shutdown_timeout()))
        .await
        .map_err(|serve_error| {
            tracing::error!(
                target: TRACING_TARGET_SERVER_SHUTDOWN,
                error = %serve_error,
                "serve loop terminated with error"
            );
            ServerError::Runtime(serve_error)
        })?;

    tracing::info!(target: TRACING_TARGET_SERVER_SHUTDOWN, "server shut down gracefully");
    Ok(())
}
