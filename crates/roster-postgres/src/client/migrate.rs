//! Embedded migration runner.
//!
//! The diesel migration harness is synchronous, so the async connection is
//! wrapped in a blocking adapter and the whole run happens on a blocking
//! thread.

use std::time::{Duration, Instant};

use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::MigrationHarness;
use tokio::task::spawn_blocking;

use crate::{MIGRATIONS, PgClient, PgError, PgResult, TRACING_TARGET_MIGRATION};

/// Outcome of a migration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    /// How long the whole run took
    pub duration: Duration,
    /// Migration versions applied by this run, in order
    pub applied_versions: Vec<String>,
}

impl MigrationReport {
    /// Returns the number of migrations applied by this run.
    #[inline]
    pub fn applied_migrations(&self) -> usize {
        self.applied_versions.len()
    }

    /// Returns true if the schema was already up to date.
    #[inline]
    pub fn is_noop(&self) -> bool {
        self.applied_versions.is_empty()
    }
}

/// Applies all pending migrations.
///
/// Safe to run repeatedly; already-applied migrations are skipped.
#[tracing::instrument(skip(pg), target = TRACING_TARGET_MIGRATION)]
pub async fn run_pending_migrations(pg: &PgClient) -> PgResult<MigrationReport> {
    tracing::info!(target: TRACING_TARGET_MIGRATION, "applying pending migrations");

    let started = Instant::now();
    let conn = pg.get_pooled_connection().await?;
    let mut conn: AsyncConnectionWrapper<_> = conn.into();

    let outcome = spawn_blocking(move || {
        conn.run_pending_migrations(MIGRATIONS)
            .map(|versions| versions.iter().map(ToString::to_string).collect::<Vec<_>>())
    })
    .await;

    let duration = started.elapsed();

    // Outer error: the blocking task itself panicked
    let outcome = outcome.map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_MIGRATION,
            duration = ?duration,
            error = %err,
            "migration task panicked"
        );
        PgError::Migration(err.into())
    })?;

    let applied_versions = outcome.map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_MIGRATION,
            duration = ?duration,
            error = %err,
            "migration run failed"
        );
        PgError::Migration(err)
    })?;

    tracing::info!(
        target: TRACING_TARGET_MIGRATION,
        duration = ?duration,
        applied = applied_versions.len(),
        "migrations up to date"
    );

    Ok(MigrationReport {
        duration,
        applied_versions,
    })
}

/// Migration support for [`PgClient`].
pub trait PgClientExt {
    /// Applies all pending migrations. See [`run_pending_migrations`].
    ///
    /// # Errors
    ///
    /// Returns an error if a migration fails to apply or the database is
    /// unreachable.
    fn run_pending_migrations(&self) -> impl Future<Output = PgResult<MigrationReport>>;
}

impl PgClientExt for PgClient {
    async fn run_pending_migrations(&self) -> PgResult<MigrationReport> {
        run_pending_migrations(self).await
    }
}
