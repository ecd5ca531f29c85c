//! Create, view and list countdown events.

use chrono::{DateTime, Utc};
use serde::Serialize;

use tminus_core::constants::MAX_TITLE_CHARS;
use tminus_core::util::slug::is_valid_slug;
use tminus_core::util::time::{format_utc, parse_to_utc};
use tminus_db::db::store::EventStore;
use tminus_db::error::DbError;
use tminus_db::model::{Event, NewEvent};

use crate::error::{ServiceError, ServiceResult};
use crate::slug::allocate_unique_slug;

/// Inserts attempted before giving up on a slug that keeps losing races.
pub const MAX_INSERT_ATTEMPTS: usize = 5;

/// Raw creation form values, exactly as submitted.
#[derive(Debug, Clone, Default)]
pub struct CreateEventInput {
    pub title: Option<String>,
    pub until_iso: Option<String>,
}

/// An event as clients see it: timestamps already rendered as `Z`-suffixed ISO-8601.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventSummary {
    pub slug: String,
    pub title: String,
    pub until_iso: String,
    pub created_iso: String,
}

impl From<&Event> for EventSummary {
    fn from(event: &Event) -> Self {
        Self {
            slug: event.slug.clone(),
            title: event.title.clone(),
            until_iso: format_utc(&event.until_utc),
            created_iso: format_utc(&event.created_at),
        }
    }
}

/// Payload for the countdown page: the event plus the server clock, so the
/// client can correct for its own skew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventView {
    #[serde(flatten)]
    pub event: EventSummary,
    pub server_utc_now: String,
}

/// ## Summary
/// Trims a title and cuts it to `MAX_TITLE_CHARS` characters.
///
/// Returns `None` when nothing is left after trimming.
#[must_use]
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(MAX_TITLE_CHARS).collect())
}

/// ## Summary
/// Validates the form, allocates a slug and stores the new event.
///
/// ## Side Effects
/// - Inserts one row into the event store
///
/// ## Errors
/// Returns `ServiceError::ValidationError` if the title or deadline is blank
/// or the deadline is not a date/time, `ServiceError::SlugSpaceExhausted` if
/// every insert attempt lost its slug to a concurrent writer, or a database
/// error if the store fails.
#[tracing::instrument(skip(store, input))]
pub async fn create_event(
    store: &dyn EventStore,
    input: &CreateEventInput,
    slug_length: usize,
    now: DateTime<Utc>,
) -> ServiceResult<Event> {
    let title = input.title.as_deref().and_then(normalize_title);
    let until_raw = input
        .until_iso
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let (Some(title), Some(until_raw)) = (title, until_raw) else {
        return Err(ServiceError::ValidationError(
            "Title and date/time are required.".to_string(),
        ));
    };

    let until_utc =
        parse_to_utc(until_raw).map_err(|e| ServiceError::ValidationError(e.to_string()))?;

    for attempt in 1..=MAX_INSERT_ATTEMPTS {
        let slug = allocate_unique_slug(store, slug_length).await?;
        let new_event = NewEvent {
            slug,
            title: title.clone(),
            until_utc,
            created_at: now,
        };

        match store.insert_event(&new_event).await {
            Ok(event) => {
                tracing::info!(slug = %event.slug, "Event created");
                return Ok(event);
            }
            Err(DbError::UniqueViolation(slug)) => {
                tracing::warn!(%slug, attempt, "Slug taken between check and insert, retrying");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(ServiceError::SlugSpaceExhausted)
}

/// ## Summary
/// Loads an event for the countdown page.
///
/// ## Errors
/// Returns `ServiceError::NotFound` if no event has this slug, or a database
/// error if the lookup fails.
#[tracing::instrument(skip(store))]
pub async fn view_event(
    store: &dyn EventStore,
    slug: &str,
    now: DateTime<Utc>,
) -> ServiceResult<EventView> {
    if !is_valid_slug(slug) {
        return Err(ServiceError::NotFound(slug.to_string()));
    }

    let event = store
        .find_by_slug(slug)
        .await?
        .ok_or_else(|| ServiceError::NotFound(slug.to_string()))?;

    Ok(EventView {
        event: EventSummary::from(&event),
        server_utc_now: format_utc(&now),
    })
}

/// ## Summary
/// Lists the most recently created events, newest first.
///
/// ## Errors
/// Returns a database error if the query fails.
#[tracing::instrument(skip(store))]
pub async fn list_recent(store: &dyn EventStore, limit: i64) -> ServiceResult<Vec<EventSummary>> {
    let events = store.list_recent(limit).await?;
    Ok(events.iter().map(EventSummary::from).collect())
}
