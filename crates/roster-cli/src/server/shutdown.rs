//! Shutdown signal handling.

use std::time::Duration;

use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix;

use crate::TRACING_TARGET_SERVER_SHUTDOWN;

/// Resolves when the process receives SIGTERM or SIGINT (Ctrl+C).
///
/// Passed to axum's graceful shutdown, which then stops accepting new
/// connections and drains in-flight requests.
pub(crate) async fn shutdown_signal(shutdown_timeout: Duration) {
    let interrupt = async {
        ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        unix::signal(unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => {
            tracing::info!(
                target: TRACING_TARGET_SERVER_SHUTDOWN,
                "received Ctrl+C, shutting down"
            );
        }
        _ = terminate => {
            tracing::info!(
                target: TRACING_TARGET_SERVER_SHUTDOWN,
                "received SIGTERM, shutting down"
            );
        }
    }

    tracing::info!(
        target: TRACING_TARGET_SERVER_SHUTDOWN,
        timeout = ?shutdown_timeout,
        "draining in-flight requests"
    );
}
