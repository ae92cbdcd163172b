//! User listing and creation handlers.
//!
//! Listing resolves lenient pagination bounds, then fetches the total count
//! and the requested page. Creation validates the payload before any store
//! access, performs a fast-path duplicate check, and inserts; the unique
//! email index remains the authoritative duplicate guard.

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use roster_postgres::model::NewUser;
use roster_postgres::query::UserRepository;
use roster_postgres::{PgClient, PgError};

use super::request::{CreateUser, PageParams};
use super::response::{PageInfo, UserCreated, UserData, UserList};
use crate::extract::Json;
use crate::handler::{Error, ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for user operations.
const TRACING_TARGET: &str = "roster_server::handler::users";

/// Converts a store fault, giving plain server errors a route-specific
/// message. Errors already mapped to a client response (constraint
/// violations) pass through untouched.
fn store_fault(error: PgError, message: &'static str) -> Error<'static> {
    let error = Error::from(error);
    if error.kind() == ErrorKind::InternalServerError && error.message().is_none() {
        error.with_message(message)
    } else {
        error
    }
}

/// Lists users with pagination.
#[tracing::instrument(skip_all)]
async fn list_users(
    State(pg_client): State<PgClient>,
    Query(params): Query<PageParams>,
) -> Result<(StatusCode, Json<UserList>)> {
    let request = params.resolve();
    tracing::trace!(
        target: TRACING_TARGET,
        page = request.page,
        limit = request.limit,
        skip = request.skip(),
        "listing users"
    );

    let fetch_fault = |error| store_fault(error, "Server error while fetching users");
    let mut conn = pg_client.get_connection().await.map_err(fetch_fault)?;
    let total_users = conn.count_users().await.map_err(fetch_fault)?;
    let users = conn.list_users(request.into()).await.map_err(fetch_fault)?;

    tracing::info!(
        target: TRACING_TARGET,
        total_users,
        returned = users.len(),
        page = request.page,
        "users fetched"
    );

    let pagination = PageInfo::new(request.page, request.limit, total_users);
    let users = users.into_iter().map(UserData::from_model).collect();
    Ok((StatusCode::OK, Json(UserList::new(pagination, users))))
}

/// Creates a new user.
#[tracing::instrument(skip_all)]
async fn create_user(
    State(pg_client): State<PgClient>,
    Json(request): Json<CreateUser>,
) -> Result<(StatusCode, Json<UserCreated>)> {
    let Some((name, email)) = request.into_fields() else {
        tracing::debug!(target: TRACING_TARGET, "user creation rejected: missing fields");
        return Err(ErrorKind::BadRequest
            .with_message("Name and Email are required")
            .with_resource("user"));
    };

    let create_fault = |error| store_fault(error, "Server error while creating user");
    let mut conn = pg_client.get_connection().await.map_err(create_fault)?;

    // Fast-path check only; the unique index on email_address is authoritative
    if conn.email_exists(&email).await.map_err(create_fault)? {
        tracing::warn!(target: TRACING_TARGET, "user creation failed: email already exists");
        return Err(ErrorKind::Conflict
            .with_message("Email already exists")
            .with_resource("user"));
    }

    let new_user = NewUser {
        display_name: name,
        email_address: email,
    };
    let user = conn.create_user(new_user).await.map_err(create_fault)?;

    tracing::info!(
        target: TRACING_TARGET,
        user_id = %user.id,
        "user created"
    );

    let user = UserData::from_model(user);
    Ok((StatusCode::CREATED, Json(UserCreated::new(user))))
}

/// Returns a [`Router`] with all user routes.
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/users", get(list_users).post(create_user))
}

#[cfg(test)]
mod tests {
    use roster_postgres::error::{DatabaseErrorKind, DieselError};

    use super::*;

    #[test]
    fn plain_store_faults_get_the_route_message() {
        let error = store_fault(
            PgError::Query(DieselError::NotFound),
            "Server error while fetching users",
        );
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
        assert_eq!(error.message(), Some("Server error while fetching users"));
    }

    #[test]
    fn constraint_mapped_errors_pass_through() {
        struct UniqueEmail;

        impl roster_postgres::error::DatabaseErrorInformation for UniqueEmail {
            fn message(&self) -> &str {
                "duplicate key value violates unique constraint"
            }
            fn details(&self) -> Option<&str> {
                None
            }
            fn hint(&self) -> Option<&str> {
                None
            }
            fn table_name(&self) -> Option<&str> {
                Some("users")
            }
            fn column_name(&self) -> Option<&str> {
                None
            }
            fn constraint_name(&self) -> Option<&str> {
                Some("users_email_address_key")
            }
            fn statement_position(&self) -> Option<i32> {
                None
            }
        }

        let violation = PgError::Query(DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new(UniqueEmail),
        ));

        let error = store_fault(violation, "Server error while creating user");
        assert_eq!(error.kind(), ErrorKind::Conflict);
        assert_eq!(error.message(), Some("Email already exists"));
    }
}
