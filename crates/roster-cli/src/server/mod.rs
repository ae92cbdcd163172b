//! HTTP server lifecycle.
//!
//! Binds the listener, runs the serve loop, and coordinates graceful
//! shutdown on SIGINT/SIGTERM.

mod error;
mod http_server;
mod shutdown;

use axum::Router;
pub use error::{Result, ServerError};
use http_server::serve_http;
pub(crate) use shutdown::shutdown_signal;

use crate::config::ServerConfig;

/// Runs the HTTP server until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the serve loop fails.
pub async fn serve(app: Router, config: ServerConfig) -> Result<()> {
    serve_http(app, config).await
}
