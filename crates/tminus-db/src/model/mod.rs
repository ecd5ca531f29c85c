use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;

/// A stored countdown event.
///
/// Field order matches the `events` table in every backend, so rows load
/// straight from `events::table` without an explicit select.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Serialize)]
pub struct Event {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub until_utc: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// An event that has not been stored yet; the store assigns `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub slug: String,
    pub title: String,
    pub until_utc: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl NewEvent {
    /// Attaches a store-assigned id.
    #[must_use]
    pub fn into_event(self, id: i32) -> Event {
        Event {
            id,
            slug: self.slug,
            title: self.title,
            until_utc: self.until_utc,
            created_at: self.created_at,
        }
    }
}
