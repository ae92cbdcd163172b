#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Migrations baked into the binary, so deployments never need the SQL files
/// on disk.
pub(crate) const MIGRATIONS: diesel_migrations::EmbeddedMigrations =
    diesel_migrations::embed_migrations!();

// Tracing targets shared across the crate.

/// Tracing target for query execution.
pub const TRACING_TARGET_QUERY: &str = "roster_postgres::query";

/// Tracing target for schema migrations.
pub const TRACING_TARGET_MIGRATION: &str = "roster_postgres::migrations";

/// Tracing target for pool and connection lifecycle.
pub const TRACING_TARGET_CONNECTION: &str = "roster_postgres::connection";

mod client;
pub mod model;
pub mod query;
mod schema;
pub mod types;

use std::borrow::Cow;

use deadpool::managed::TimeoutType;
use diesel::ConnectionError;
use diesel::result::Error;
pub use diesel_async::AsyncPgConnection as PgConnection;

pub use crate::client::{
    ConnectionPool, MigrationReport, PgClient, PgClientExt, PgConfig, PgConn, PgPoolStatus,
    PooledConnection, run_pending_migrations,
};
use crate::types::ConstraintViolation;

pub mod error {
    //! Re-exports of the underlying diesel/deadpool error types.
    //!
    //! Callers normally only see [`PgError`]; these are here for the rare
    //! case where the original error must be inspected directly.
    //!
    //! [`PgError`]: crate::PgError

    /// Boxed error that can cross thread boundaries.
    pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

    pub use deadpool::managed::TimeoutType;
    pub use diesel::result::{
        ConnectionError as DieselConnectionError, DatabaseErrorInformation, DatabaseErrorKind,
        Error as DieselError,
    };
    pub use diesel_async::pooled_connection::PoolError as DieselPoolError;
    pub use diesel_async::pooled_connection::deadpool::PoolError as DeadpoolError;
}

pub use crate::error::DieselError;

/// Error type shared by every database operation in this crate.
///
/// Pool, connection, migration, and query failures all funnel into this enum
/// so callers deal with a single error type at the crate boundary.
#[derive(Debug, thiserror::Error)]
#[must_use = "database errors should be handled appropriately"]
pub enum PgError {
    /// The pool gave up waiting for a connection.
    ///
    /// Carries which stage of the connection lifecycle timed out (create,
    /// wait, or recycle).
    #[error("Database operation timed out")]
    Timeout(TimeoutType),

    /// A connection could not be established or kept alive.
    ///
    /// Covers bad credentials, unreachable hosts, and malformed connection
    /// strings.
    #[error("Database connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// A schema migration failed to apply.
    #[error("Database migration error: {0}")]
    Migration(error::BoxError),

    /// A query failed to execute.
    ///
    /// Constraint violations land here; see [`PgError::constraint_violation`].
    #[error("Database query error: {0}")]
    Query(#[from] Error),

    /// Anything the other variants do not cover.
    #[error("Unexpected error: {0}")]
    Unexpected(Cow<'static, str>),
}

impl PgError {
    /// Returns the name of the violated constraint, if any.
    pub fn constraint(&self) -> Option<&str> {
        let PgError::Query(Error::DatabaseError(_, info)) = self else {
            return None;
        };

        info.constraint_name()
    }

    /// Returns the violated constraint parsed into a [`ConstraintViolation`].
    ///
    /// Yields `None` when the error is not a constraint violation, or when
    /// the constraint name is not one this crate knows about.
    pub fn constraint_violation(&self) -> Option<ConstraintViolation> {
        self.constraint().and_then(ConstraintViolation::new)
    }
}

impl From<error::DeadpoolError> for PgError {
    fn from(value: error::DeadpoolError) -> Self {
        use error::{DeadpoolError, DieselPoolError};

        match value {
            DeadpoolError::Timeout(timeout) => Self::Timeout(timeout),
            DeadpoolError::Backend(DieselPoolError::QueryError(error)) => Self::Query(error),
            DeadpoolError::Backend(DieselPoolError::ConnectionError(error)) => {
                Self::Connection(error)
            }
            DeadpoolError::PostCreateHook(err) => {
                tracing::warn!(target: TRACING_TARGET_CONNECTION, "post-create hook failed: {}", err);
                Self::Unexpected(err.to_string().into())
            }
            DeadpoolError::NoRuntimeSpecified => {
                tracing::error!(target: TRACING_TARGET_CONNECTION, "connection pool has no async runtime");
                Self::Unexpected("No runtime specified".into())
            }
            DeadpoolError::Closed => Self::Connection(ConnectionError::InvalidConnectionUrl(
                "Connection pool is closed".into(),
            )),
        }
    }
}

/// Shorthand [`Result`] with [`PgError`] as the default error type.
pub type PgResult<T, E = PgError> = Result<T, E>;
