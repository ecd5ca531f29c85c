use futures::future::BoxFuture;

use crate::db::connection::DbPool;
use crate::db::query;
use crate::db::store::EventStore;
use crate::error::DbResult;
use crate::model::{Event, NewEvent};

/// PostgreSQL-backed store over a bb8 connection pool.
#[derive(Clone)]
pub struct PgEventStore {
    pool: DbPool,
}

impl PgEventStore {
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl EventStore for PgEventStore {
    fn slug_exists<'a>(&'a self, slug: &'a str) -> BoxFuture<'a, DbResult<bool>> {
        Box::pin(async move {
            let mut conn = self.pool.get().await?;
            query::postgres::slug_exists(&mut conn, slug).await
        })
    }

    fn insert_event<'a>(&'a self, new_event: &'a NewEvent) -> BoxFuture<'a, DbResult<Event>> {
        Box::pin(async move {
            let mut conn = self.pool.get().await?;
            query::postgres::insert_event(&mut conn, new_event).await
        })
    }

    fn find_by_slug<'a>(&'a self, slug: &'a str) -> BoxFuture<'a, DbResult<Option<Event>>> {
        Box::pin(async move {
            let mut conn = self.pool.get().await?;
            query::postgres::find_by_slug(&mut conn, slug).await
        })
    }

    fn list_recent(&self, limit: i64) -> BoxFuture<'_, DbResult<Vec<Event>>> {
        Box::pin(async move {
            let mut conn = self.pool.get().await?;
            query::postgres::list_recent(&mut conn, limit).await
        })
    }
}
