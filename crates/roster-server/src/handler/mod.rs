//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod error;
mod monitors;
pub mod request;
pub mod response;
mod users;

use axum::Router;
use axum::response::{IntoResponse, Response};

pub use crate::handler::error::{Error, ErrorKind, Result};
use crate::service::ServiceState;

#[inline]
async fn fallback() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns a [`Router`] with all routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .merge(monitors::routes())
        .merge(users::routes())
        .fallback(fallback)
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;

    use crate::service::ServiceState;

    /// Returns a new [`TestServer`] over the full route set.
    ///
    /// The connection pool is created lazily, so no database is required for
    /// routes that never touch the store.
    fn create_test_server() -> anyhow::Result<TestServer> {
        let state = ServiceState::for_tests()?;
        let router = super::routes().with_state(state);
        Ok(TestServer::new(router)?)
    }

    #[tokio::test]
    async fn welcome_returns_success_envelope() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Welcome to our page!");
        Ok(())
    }

    #[tokio::test]
    async fn unknown_route_returns_error_envelope() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/unknown").await;
        response.assert_status_not_found();

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["message"].is_string());
        Ok(())
    }

    #[tokio::test]
    async fn create_user_rejects_missing_fields_before_store_access() -> anyhow::Result<()> {
        let server = create_test_server()?;

        // The pool points at nothing; reaching the store would not return 400
        let response = server
            .post("/users")
            .json(&serde_json::json!({ "name": "Alice" }))
            .await;
        response.assert_status_bad_request();

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Name and Email are required");
        Ok(())
    }

    #[tokio::test]
    async fn create_user_rejects_empty_fields() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .post("/users")
            .json(&serde_json::json!({ "name": "", "email": "a@x.com" }))
            .await;
        response.assert_status_bad_request();

        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Name and Email are required");
        Ok(())
    }
}
