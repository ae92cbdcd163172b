//! Translation of database faults into HTTP errors.
//!
//! Recognized constraint violations map to their client-facing responses;
//! everything else becomes a generic 500. Failure detail is logged for
//! operators and never reaches the response body.

use roster_postgres::PgError;
use roster_postgres::types::{ConstraintViolation, UserConstraints};

use crate::handler::{Error, ErrorKind};

/// Tracing target for database error translation.
const TRACING_TARGET: &str = "roster_server::postgres_constraints";

impl From<ConstraintViolation> for Error<'static> {
    fn from(constraint: ConstraintViolation) -> Self {
        match constraint {
            ConstraintViolation::User(c) => c.into(),
        }
    }
}

impl From<UserConstraints> for Error<'static> {
    fn from(c: UserConstraints) -> Self {
        let error = match c {
            UserConstraints::DisplayNameNotEmpty | UserConstraints::EmailAddressNotEmpty => {
                ErrorKind::BadRequest.with_message("Name and Email are required")
            }
            UserConstraints::EmailAddressUnique => {
                ErrorKind::Conflict.with_message("Email already exists")
            }
            UserConstraints::PrimaryKey => ErrorKind::InternalServerError.into_error(),
        };

        error.with_resource("user")
    }
}

impl From<PgError> for Error<'static> {
    fn from(error: PgError) -> Self {
        match error {
            PgError::Timeout(timeout) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    timeout = ?timeout,
                    "store operation timed out",
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Connection(connection_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %connection_error,
                    "store connection failed"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Migration(migration_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %migration_error,
                    "store migration failed"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Query(ref query_error) => {
                // A recognized constraint violation has its own response
                if let Some(constraint_name) = error.constraint()
                    && let Some(constraint) = ConstraintViolation::new(constraint_name)
                {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        constraint = constraint_name,
                        error = %query_error,
                        "query rejected by constraint"
                    );
                    return constraint.into();
                }

                tracing::error!(
                    target: TRACING_TARGET,
                    error = %query_error,
                    "query failed"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Unexpected(unexpected_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %unexpected_error,
                    "unexpected store error"
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use roster_postgres::PgError;
    use roster_postgres::error::{DatabaseErrorInformation, DatabaseErrorKind, DieselError};

    use super::*;

    struct FakeDatabaseError {
        constraint: Option<&'static str>,
    }

    impl DatabaseErrorInformation for FakeDatabaseError {
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
            self.constraint
        }

        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn unique_violation(constraint: &'static str) -> PgError {
        PgError::Query(DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new(FakeDatabaseError {
                constraint: Some(constraint),
            }),
        ))
    }

    #[test]
    fn unique_email_violation_maps_to_conflict() {
        let error: Error<'static> = unique_violation("users_email_address_key").into();
        assert_eq!(error.kind(), ErrorKind::Conflict);
        assert_eq!(error.message(), Some("Email already exists"));
        assert_eq!(error.resource(), Some("user"));
    }

    #[test]
    fn empty_field_violation_maps_to_bad_request() {
        let error: Error<'static> = unique_violation("users_email_address_not_empty").into();
        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert_eq!(error.message(), Some("Name and Email are required"));
    }

    #[test]
    fn unknown_constraint_maps_to_internal_error() {
        let error: Error<'static> = unique_violation("users_mystery_constraint").into();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
        assert_eq!(error.kind().status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn plain_query_error_maps_to_internal_error() {
        let error: Error<'static> = PgError::Query(DieselError::NotFound).into();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
    }
}
