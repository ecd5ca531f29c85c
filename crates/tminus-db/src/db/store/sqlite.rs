use futures::future::BoxFuture;
use tokio::sync::Mutex;

use crate::db::connection::SqliteConn;
use crate::db::query;
use crate::db::store::EventStore;
use crate::error::DbResult;
use crate::model::{Event, NewEvent};

/// Embedded SQLite store. SQLite allows one writer at a time, so a single
/// connection behind a mutex serves every request.
pub struct SqliteEventStore {
    conn: Mutex<SqliteConn>,
}

impl SqliteEventStore {
    #[must_use]
    pub fn new(conn: SqliteConn) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

impl EventStore for SqliteEventStore {
    fn slug_exists<'a>(&'a self, slug: &'a str) -> BoxFuture<'a, DbResult<bool>> {
        Box::pin(async move {
            let mut conn = self.conn.lock().await;
            query::sqlite::slug_exists(&mut conn, slug).await
        })
    }

    fn insert_event<'a>(&'a self, new_event: &'a NewEvent) -> BoxFuture<'a, DbResult<Event>> {
        Box::pin(async move {
            let mut conn = self.conn.lock().await;
            query::sqlite::insert_event(&mut conn, new_event).await
        })
    }

    fn find_by_slug<'a>(&'a self, slug: &'a str) -> BoxFuture<'a, DbResult<Option<Event>>> {
        Box::pin(async move {
            let mut conn = self.conn.lock().await;
            query::sqlite::find_by_slug(&mut conn, slug).await
        })
    }

    fn list_recent(&self, limit: i64) -> BoxFuture<'_, DbResult<Vec<Event>>> {
        Box::pin(async move {
            let mut conn = self.conn.lock().await;
            query::sqlite::list_recent(&mut conn, limit).await
        })
    }
}
