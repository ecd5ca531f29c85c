//! Embedded schema migrations, one set per backend.

use diesel::{Connection, PgConnection, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::error::{DbError, DbResult};

const POSTGRES_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/postgres");
const SQLITE_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/sqlite");

/// ## Summary
/// Runs pending PostgreSQL migrations on a dedicated blocking connection.
///
/// ## Errors
/// Returns an error if the connection or any migration fails.
#[tracing::instrument(skip(database_url))]
pub async fn run_postgres_migrations(database_url: &str) -> DbResult<()> {
    let url = database_url.to_string();

    tokio::task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(&url)?;
        let applied = conn
            .run_pending_migrations(POSTGRES_MIGRATIONS)
            .map_err(|e| DbError::MigrationError(e.to_string()))?;
        tracing::info!(applied = applied.len(), "PostgreSQL migrations complete");
        Ok::<_, DbError>(())
    })
    .await
    .map_err(|e| DbError::MigrationError(format!("migration task failed: {e}")))?
}

/// ## Summary
/// Runs pending SQLite migrations on the given connection.
///
/// Must be called on the connection that will serve queries, since an
/// in-memory database is private to its connection.
///
/// ## Errors
/// Returns an error if any migration fails.
pub fn run_sqlite_migrations(conn: &mut SqliteConnection) -> DbResult<()> {
    let applied = conn
        .run_pending_migrations(SQLITE_MIGRATIONS)
        .map_err(|e| DbError::MigrationError(e.to_string()))?;
    tracing::info!(applied = applied.len(), "SQLite migrations complete");
    Ok(())
}
