use std::borrow::Cow;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// The `{success, message}` envelope every failure renders as.
///
/// Only the `success` flag and the user-facing message are serialized. The
/// resource and context fields travel with the value for logging and
/// debugging, but are marked `skip` so they can never leak to the client.
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse<'a> {
    /// Always `false` for error responses
    pub success: bool,
    /// User-friendly error message safe for client display
    pub message: Cow<'a, str>,
    /// The resource that the error relates to (optional, set by handler)
    #[serde(skip)]
    pub resource: Option<Cow<'a, str>>,
    /// Internal context for debugging (never exposed to the client)
    #[serde(skip)]
    pub context: Option<Cow<'a, str>>,
    /// HTTP status code (not serialized in JSON)
    #[serde(skip)]
    pub status: StatusCode,
}

impl<'a> ErrorResponse<'a> {
    // 4xx Client Errors
    pub const BAD_REQUEST: Self = Self::new(
        "The request could not be processed due to invalid data",
        StatusCode::BAD_REQUEST,
    );
    pub const CONFLICT: Self = Self::new(
        "The request conflicts with the current state of the resource",
        StatusCode::CONFLICT,
    );
    pub const NOT_FOUND: Self = Self::new(
        "The requested resource was not found",
        StatusCode::NOT_FOUND,
    );
    // 5xx Server Errors
    pub const INTERNAL_SERVER_ERROR: Self = Self::new(
        "An internal server error occurred. Please try again later",
        StatusCode::INTERNAL_SERVER_ERROR,
    );

    /// Creates an envelope with the given message and status.
    #[inline]
    pub const fn new(message: &'a str, status: StatusCode) -> Self {
        Self {
            success: false,
            message: Cow::Borrowed(message),
            resource: None,
            context: None,
            status,
        }
    }

    /// Replaces the user-facing message.
    pub fn with_message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Records the resource the error relates to.
    ///
    /// Repeated calls join the values into a path.
    pub fn with_resource(mut self, resource: impl Into<Cow<'a, str>>) -> Self {
        let appended = resource.into();
        self.resource = Some(match self.resource {
            Some(existing) => Cow::Owned(format!("{}/{}", existing, appended)),
            None => appended,
        });
        self
    }

    /// Records internal context.
    ///
    /// Repeated calls append, separated by `;`.
    pub fn with_context(mut self, context: impl Into<Cow<'a, str>>) -> Self {
        let appended = context.into();
        self.context = Some(match self.context {
            Some(existing) => Cow::Owned(format!("{}; {}", existing, appended)),
            None => appended,
        });
        self
    }
}

impl Default for ErrorResponse<'_> {
    #[inline]
    fn default() -> Self {
        Self::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ErrorResponse<'_> {
    #[inline]
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_only_success_and_message() {
        let response = ErrorResponse::CONFLICT
            .with_message("Email already exists")
            .with_resource("user")
            .with_context("internal detail");

        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "success": false,
                "message": "Email already exists",
            })
        );
    }

    #[test]
    fn with_message_replaces_default() {
        let response = ErrorResponse::BAD_REQUEST.with_message("Name and Email are required");
        assert_eq!(response.message, "Name and Email are required");
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn merges_repeated_context() {
        let response = ErrorResponse::NOT_FOUND
            .with_context("first")
            .with_context("second");
        assert_eq!(response.context.as_deref(), Some("first; second"));
    }

    #[test]
    fn default_is_internal_server_error() {
        let response = ErrorResponse::default();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!response.success);
    }
}
