use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use deadpool::managed::Pool;
use derive_more::{Deref, DerefMut};
use diesel_async::RunQueryDsl;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;

use crate::{
    ConnectionPool, PgConfig, PgError, PgResult, PooledConnection, TRACING_TARGET_CONNECTION,
};

/// Snapshot of the connection pool state.
#[derive(Debug, Clone)]
pub struct PgPoolStatus {
    /// Configured pool capacity
    pub max_size: usize,
    /// Connections currently held by the pool
    pub size: usize,
    /// Connections ready to be handed out
    pub available: usize,
    /// Callers waiting for a connection
    pub waiting: usize,
}

/// Pooled database client shared by all request handlers.
///
/// Cloning is cheap; every clone refers to the same underlying pool.
#[derive(Clone)]
pub struct PgClient {
    inner: Arc<PgClientInner>,
}

struct PgClientInner {
    pool: ConnectionPool,
    config: PgConfig,
}

impl PgClient {
    /// Builds the connection pool for the given configuration.
    ///
    /// Connections are opened lazily on first use, so the database does not
    /// need to be reachable at construction time.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool itself cannot be assembled; a wrong
    /// connection string only shows up once a connection is requested.
    #[tracing::instrument(
        skip(config),
        target = TRACING_TARGET_CONNECTION,
        fields(database_url = %config.database_url_masked())
    )]
    pub fn new(config: PgConfig) -> PgResult<Self> {
        tracing::info!(target: TRACING_TARGET_CONNECTION, "initializing database client");

        let manager = AsyncDieselConnectionManager::new(&config.postgres_url);

        let pool = Pool::builder(manager)
            .max_size(config.postgres_max_connections as usize)
            .wait_timeout(config.connection_timeout())
            .create_timeout(config.connection_timeout())
            .recycle_timeout(config.idle_timeout())
            .runtime(deadpool::Runtime::Tokio1)
            .build()
            .map_err(|e| {
                tracing::error!(target: TRACING_TARGET_CONNECTION, error = %e, "pool construction failed");
                PgError::Unexpected(format!("Failed to build connection pool: {}", e).into())
            })?;

        Ok(Self {
            inner: Arc::new(PgClientInner { pool, config }),
        })
    }

    /// Checks out a connection from the pool.
    ///
    /// Waits up to the configured timeout when the pool is exhausted. The
    /// returned [`PgConn`] hands the connection back on drop.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection becomes available in time or a new
    /// connection cannot be opened.
    #[tracing::instrument(skip(self), target = TRACING_TARGET_CONNECTION)]
    pub async fn get_connection(&self) -> PgResult<PgConn> {
        let checkout = Instant::now();
        let conn = self.inner.pool.get().await.map_err(|e| {
            tracing::error!(
                target: TRACING_TARGET_CONNECTION,
                error = %e,
                waited = ?checkout.elapsed(),
                "connection checkout failed"
            );
            PgError::from(e)
        })?;

        let waited = checkout.elapsed();
        if waited > Duration::from_millis(100) {
            tracing::warn!(
                target: TRACING_TARGET_CONNECTION,
                waited = ?waited,
                "slow connection checkout"
            );
        }

        tracing::debug!(target: TRACING_TARGET_CONNECTION, waited = ?waited, "connection checked out");
        Ok(PgConn::new(conn))
    }

    /// Checks out a raw pooled connection, for the migration harness.
    pub(crate) async fn get_pooled_connection(&self) -> PgResult<PooledConnection> {
        let conn = self.inner.pool.get().await.map_err(PgError::from)?;
        Ok(conn)
    }

    /// Verifies connectivity by round-tripping a trivial query.
    ///
    /// # Errors
    ///
    /// Returns an error if a connection cannot be acquired or the query fails.
    #[tracing::instrument(skip(self), target = TRACING_TARGET_CONNECTION)]
    pub async fn ping(&self) -> PgResult<()> {
        let mut conn = self.get_connection().await?;

        #[derive(diesel::QueryableByName)]
        struct Probe {
            #[diesel(sql_type = diesel::sql_types::Integer)]
            #[allow(dead_code)]
            value: i32,
        }

        let _: Probe = diesel::sql_query("SELECT 1 as value")
            .get_result(&mut *conn)
            .await
            .map_err(|e| {
                tracing::error!(target: TRACING_TARGET_CONNECTION, error = %e, "connectivity probe failed");
                PgError::from(e)
            })?;

        Ok(())
    }

    /// Returns the current pool statistics.
    #[inline]
    pub fn pool_status(&self) -> PgPoolStatus {
        let status = self.inner.pool.status();
        PgPoolStatus {
            max_size: status.max_size,
            size: status.size,
            available: status.available,
            waiting: status.waiting,
        }
    }
}

impl fmt::Debug for PgClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.pool_status();
        f.debug_struct("PgClient")
            .field("database_url", &self.inner.config.database_url_masked())
            .field("pool_max_size", &status.max_size)
            .field("pool_size", &status.size)
            .field("pool_available", &status.available)
            .field("pool_waiting", &status.waiting)
            .finish()
    }
}

/// A checked-out database connection.
///
/// Dereferences to the underlying [`AsyncPgConnection`], so every repository
/// trait (e.g. [`UserRepository`]) is callable on it directly. Dropping the
/// wrapper returns the connection to the pool.
///
/// ```ignore
/// let mut conn = pg_client.get_connection().await?;
/// let taken = conn.email_exists("a@example.com").await?;
/// ```
///
/// [`UserRepository`]: crate::query::UserRepository
/// [`AsyncPgConnection`]: crate::PgConnection
#[derive(Deref, DerefMut)]
pub struct PgConn {
    #[deref]
    #[deref_mut]
    conn: PooledConnection,
}

impl PgConn {
    /// Wraps a pooled connection.
    pub fn new(conn: PooledConnection) -> Self {
        Self { conn }
    }
}

impl fmt::Debug for PgConn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgConn").finish_non_exhaustive()
    }
}
