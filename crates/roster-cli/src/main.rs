#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use roster_server::handler;
use roster_server::service::ServiceState;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Cli, ServerConfig};

// Tracing target constants
pub const TRACING_TARGET_SERVER_STARTUP: &str = "roster_cli::server::startup";
pub const TRACING_TARGET_SERVER_SHUTDOWN: &str = "roster_cli::server::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "roster_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    // Tracing may not be initialized yet if config parsing failed early
    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Parses configuration, assembles the service, and serves until shutdown.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    init_tracing();
    log_startup();

    cli.server
        .validate()
        .context("invalid server configuration")?;
    tracing::info!(
        target: TRACING_TARGET_CONFIG,
        host = %cli.server.host,
        port = cli.server.port,
        request_timeout_secs = cli.server.request_timeout,
        shutdown_timeout_secs = cli.server.shutdown_timeout,
        "server configuration resolved"
    );

    let state = ServiceState::from_config(&cli.service)
        .await
        .context("failed to create service state")?;
    let router = create_router(state, &cli.server);

    server::serve(router, cli.server).await?;

    Ok(())
}

/// Assembles the router with its middleware stack.
///
/// Layers apply in reverse order of addition: the timeout bounds everything,
/// the trace layer logs each request, and the routes sit innermost.
fn create_router(state: ServiceState, server_config: &ServerConfig) -> Router {
    handler::routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(server_config.request_timeout()))
}

/// Installs the tracing subscriber, filtered by `RUST_LOG` when set.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Logs version and build details once at startup.
fn log_startup() {
    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        "starting roster server"
    );

    tracing::debug!(
        target: TRACING_TARGET_SERVER_STARTUP,
        pid = process::id(),
        arch = std::env::consts::ARCH,
        os = std::env::consts::OS,
        "build information"
    );
}
