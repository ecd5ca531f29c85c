use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::SqliteConn;
use crate::db::schema::sqlite::events;
use crate::error::{DbError, DbResult};
use crate::model::{Event, NewEvent};

/// ## Summary
/// Checks whether any event already uses `slug`.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn slug_exists(conn: &mut SqliteConn, slug: &str) -> DbResult<bool> {
    let exists = diesel::select(diesel::dsl::exists(
        events::table.filter(events::slug.eq(slug.to_string())),
    ))
    .get_result::<bool>(conn)
    .await?;

    Ok(exists)
}

/// ## Summary
/// Inserts an event and reads the stored row back by slug.
///
/// ## Errors
/// Returns `DbError::UniqueViolation` if the slug is taken, or a database
/// error if the insert fails for any other reason.
pub async fn insert_event(conn: &mut SqliteConn, new_event: &NewEvent) -> DbResult<Event> {
    diesel::insert_into(events::table)
        .values((
            events::slug.eq(new_event.slug.clone()),
            events::title.eq(new_event.title.clone()),
            events::until_utc.eq(new_event.until_utc),
            events::created_at.eq(new_event.created_at),
        ))
        .execute(conn)
        .await
        .map_err(|err| DbError::from_insert(err, &new_event.slug))?;

    find_by_slug(conn, &new_event.slug)
        .await?
        .ok_or(DbError::CoreError(
            tminus_core::error::CoreError::InvariantViolation("inserted event not readable"),
        ))
}

/// ## Summary
/// Loads the event with the given slug, if any.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn find_by_slug(conn: &mut SqliteConn, slug: &str) -> DbResult<Option<Event>> {
    Ok(events::table
        .filter(events::slug.eq(slug.to_string()))
        .first::<Event>(conn)
        .await
        .optional()?)
}

/// ## Summary
/// Loads up to `limit` events, newest first.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_recent(conn: &mut SqliteConn, limit: i64) -> DbResult<Vec<Event>> {
    Ok(events::table
        .order((events::created_at.desc(), events::id.desc()))
        .limit(limit)
        .load::<Event>(conn)
        .await?)
}
