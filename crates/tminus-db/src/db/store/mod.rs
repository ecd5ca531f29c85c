//! The event store seam.
//!
//! ## Summary
//! Handlers and services hold an `Arc<dyn EventStore>` built once at startup.
//! Every backend enforces slug uniqueness itself and reports a rejected insert
//! as `DbError::UniqueViolation`, so callers can retry with a fresh slug.

mod memory;
mod postgres;
mod sqlite;

use futures::future::BoxFuture;

use crate::error::DbResult;
use crate::model::{Event, NewEvent};

pub use memory::MemoryEventStore;
pub use postgres::PgEventStore;
pub use sqlite::SqliteEventStore;

pub trait EventStore: Send + Sync {
    /// Whether any stored event uses `slug`.
    fn slug_exists<'a>(&'a self, slug: &'a str) -> BoxFuture<'a, DbResult<bool>>;

    /// Persists `new_event`; fails with `DbError::UniqueViolation` if its slug is taken.
    fn insert_event<'a>(&'a self, new_event: &'a NewEvent) -> BoxFuture<'a, DbResult<Event>>;

    fn find_by_slug<'a>(&'a self, slug: &'a str) -> BoxFuture<'a, DbResult<Option<Event>>>;

    /// Up to `limit` events ordered by `created_at` descending, newest id first on ties.
    fn list_recent(&self, limit: i64) -> BoxFuture<'_, DbResult<Vec<Event>>>;
}
