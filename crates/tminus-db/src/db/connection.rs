use std::sync::Arc;

use diesel::{Connection, SqliteConnection};
use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;

use crate::db::migrations;
use crate::db::store::{EventStore, MemoryEventStore, PgEventStore, SqliteEventStore};
use crate::error::{DbError, DbResult};

pub type DbPool = Pool<AsyncPgConnection>;
pub type DbConnection<'pool> = PooledConnection<'pool, AsyncPgConnection>;
pub type SqliteConn = SyncConnectionWrapper<SqliteConnection>;

const SQLITE_IN_MEMORY: &str = ":memory:";

/// Which backend a database URL selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreUrl {
    /// `postgres://...` or `postgresql://...`, passed through unchanged.
    Postgres(String),
    /// A SQLite database file path, or `:memory:`.
    Sqlite(String),
    /// The in-process store; nothing survives a restart.
    Memory,
}

impl StoreUrl {
    /// ## Summary
    /// Classifies a database URL.
    ///
    /// `sqlite://<path>` and bare paths select SQLite, `memory://` selects the
    /// in-process store.
    ///
    /// ## Errors
    /// Returns `DbError::UnsupportedUrl` for any other scheme, or an empty SQLite path.
    pub fn parse(url: &str) -> DbResult<Self> {
        let url = url.trim();

        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            return Ok(Self::Postgres(url.to_string()));
        }

        if url == "memory://" || url == "memory:" {
            return Ok(Self::Memory);
        }

        let path = url.strip_prefix("sqlite://").unwrap_or(url);
        if path.is_empty() || path.contains("://") {
            return Err(DbError::UnsupportedUrl(url.to_string()));
        }

        Ok(Self::Sqlite(path.to_string()))
    }

    /// Backend name for log lines; never includes credentials.
    #[must_use]
    pub const fn backend(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Sqlite(_) => "sqlite",
            Self::Memory => "memory",
        }
    }
}

/// ## Summary
/// Creates a new database connection pool.
///
/// ## Errors
/// Returns an error if the pool cannot be created with the provided database URL.
#[tracing::instrument(skip(database_url), fields(pool_size = size))]
pub async fn create_pool(database_url: &str, size: u32) -> anyhow::Result<DbPool> {
    tracing::debug!("Creating database connection pool");

    let config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);

    let pool = Pool::builder()
        .max_size(size)
        .test_on_check_out(true)
        .build(config)
        .await?;

    tracing::info!(
        pool_size = size,
        "Database connection pool created successfully"
    );

    Ok(pool)
}

/// ## Summary
/// Opens a SQLite database and brings its schema up to date.
///
/// The connection is established and migrated on a blocking thread, then
/// wrapped for async use. `:memory:` gives a private database per call.
///
/// ## Errors
/// Returns an error if the file cannot be opened or a migration fails.
#[tracing::instrument]
pub async fn open_sqlite(path: &str) -> DbResult<SqliteConn> {
    let path = path.to_string();

    let conn = tokio::task::spawn_blocking(move || {
        let mut conn = SqliteConnection::establish(&path)?;
        migrations::run_sqlite_migrations(&mut conn)?;
        Ok::<_, DbError>(conn)
    })
    .await
    .map_err(|err| DbError::MigrationError(format!("migration task failed: {err}")))??;

    tracing::info!("SQLite database ready");

    Ok(SyncConnectionWrapper::new(conn))
}

/// ## Summary
/// Builds the event store selected by `database_url`, running migrations first.
///
/// ## Errors
/// Returns an error if the URL is not recognised, the database cannot be
/// reached, or migrations fail.
#[tracing::instrument(skip(database_url))]
pub async fn connect_store(
    database_url: &str,
    pool_size: u32,
) -> anyhow::Result<Arc<dyn EventStore>> {
    let store_url = StoreUrl::parse(database_url)?;

    tracing::info!(backend = store_url.backend(), "Connecting event store");

    let store: Arc<dyn EventStore> = match store_url {
        StoreUrl::Postgres(url) => {
            migrations::run_postgres_migrations(&url).await?;
            Arc::new(PgEventStore::new(create_pool(&url, pool_size).await?))
        }
        StoreUrl::Sqlite(path) => Arc::new(SqliteEventStore::new(open_sqlite(&path).await?)),
        StoreUrl::Memory => Arc::new(MemoryEventStore::default()),
    };

    Ok(store)
}

/// ## Summary
/// Opens a private, migrated in-memory SQLite database.
///
/// ## Errors
/// Returns an error if SQLite cannot be initialised.
pub async fn open_sqlite_in_memory() -> DbResult<SqliteConn> {
    open_sqlite(SQLITE_IN_MEMORY).await
}
