use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::db::store::EventStore;
use crate::error::{DbError, DbResult};
use crate::model::{Event, NewEvent};

/// In-process store selected by `memory://`. Contents vanish with the process.
#[derive(Default)]
pub struct MemoryEventStore {
    events: RwLock<Vec<Event>>,
}

impl MemoryEventStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored events.
    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }
}

impl EventStore for MemoryEventStore {
    fn slug_exists<'a>(&'a self, slug: &'a str) -> BoxFuture<'a, DbResult<bool>> {
        Box::pin(async move { Ok(self.events.read().await.iter().any(|e| e.slug == slug)) })
    }

    fn insert_event<'a>(&'a self, new_event: &'a NewEvent) -> BoxFuture<'a, DbResult<Event>> {
        Box::pin(async move {
            // Check and push under one write lock, mirroring a unique constraint
            let mut events = self.events.write().await;
            if events.iter().any(|e| e.slug == new_event.slug) {
                return Err(DbError::UniqueViolation(new_event.slug.clone()));
            }

            let id = events
                .iter()
                .map(|e| e.id)
                .max()
                .unwrap_or(0)
                .checked_add(1)
                .ok_or(DbError::CoreError(
                    tminus_core::error::CoreError::InvariantViolation("event id overflow"),
                ))?;

            let event = new_event.clone().into_event(id);
            events.push(event.clone());
            Ok(event)
        })
    }

    fn find_by_slug<'a>(&'a self, slug: &'a str) -> BoxFuture<'a, DbResult<Option<Event>>> {
        Box::pin(async move {
            Ok(self
                .events
                .read()
                .await
                .iter()
                .find(|e| e.slug == slug)
                .cloned())
        })
    }

    fn list_recent(&self, limit: i64) -> BoxFuture<'_, DbResult<Vec<Event>>> {
        Box::pin(async move {
            let mut events = self.events.read().await.clone();
            events.sort_by(|a, b| {
                b.created_at
                    .cmp(&a.created_at)
                    .then_with(|| b.id.cmp(&a.id))
            });
            events.truncate(usize::try_from(limit).unwrap_or(0));
            Ok(events)
        })
    }
}
