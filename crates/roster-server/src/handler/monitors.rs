//! Welcome and health check handlers.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use roster_postgres::PgClient;

use super::response::StatusMessage;
use crate::extract::Json;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "roster_server::handler::monitors";

/// Serves the welcome message at the service root.
async fn welcome() -> (StatusCode, Json<StatusMessage>) {
    (StatusCode::OK, Json(StatusMessage::welcome()))
}

/// Reports service health based on a store connectivity probe.
#[tracing::instrument(skip_all)]
async fn health_status(State(pg_client): State<PgClient>) -> (StatusCode, Json<StatusMessage>) {
    match pg_client.ping().await {
        Ok(()) => (StatusCode::OK, Json(StatusMessage::healthy())),
        Err(error) => {
            tracing::error!(
                target: TRACING_TARGET,
                error = %error,
                "health check failed"
            );
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StatusMessage::unhealthy()),
            )
        }
    }
}

/// Returns a [`Router`] with all health monitoring routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_status))
}
