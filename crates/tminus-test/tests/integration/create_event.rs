//! POST /create

use salvo::http::StatusCode;

use super::helpers::{TestApp, body_string, is_slug_of_len};
use tminus_test::component::db::store::EventStore;

/// A valid form redirects with 303 to the new event page.
#[test_log::test(tokio::test)]
async fn create_redirects_to_event_page() {
    let app = TestApp::new();

    let slug = app.create_ok("Party", "2025-09-22T15:30:00Z").await;

    assert!(is_slug_of_len(&slug, 6), "unexpected slug {slug}");
    let stored = app
        .store
        .find_by_slug(&slug)
        .await
        .expect("store readable")
        .expect("event stored");
    assert_eq!(stored.title, "Party");
}

/// Blank titles are rejected with a readable 400 and nothing is stored.
#[test_log::test(tokio::test)]
async fn create_blank_title_is_bad_request() {
    let app = TestApp::new();

    let mut resp = app.create(Some("   "), Some("2025-09-22T15:30:00Z")).await;

    assert_eq!(resp.status_code, Some(StatusCode::BAD_REQUEST));
    let body = body_string(&mut resp).await;
    assert!(body.contains("required"), "body: {body}");
    assert!(app.store.is_empty().await);
}

/// Missing fields behave like blank ones.
#[test_log::test(tokio::test)]
async fn create_missing_fields_is_bad_request() {
    let app = TestApp::new();

    let resp = app.create(Some("Party"), None).await;
    assert_eq!(resp.status_code, Some(StatusCode::BAD_REQUEST));

    let resp = app.create(None, None).await;
    assert_eq!(resp.status_code, Some(StatusCode::BAD_REQUEST));

    assert!(app.store.is_empty().await);
}

/// An unparseable deadline is a 400 that names the bad input.
#[test_log::test(tokio::test)]
async fn create_invalid_deadline_is_bad_request() {
    let app = TestApp::new();

    let mut resp = app.create(Some("Party"), Some("not-a-date")).await;

    assert_eq!(resp.status_code, Some(StatusCode::BAD_REQUEST));
    let body = body_string(&mut resp).await;
    assert!(body.contains("not-a-date"), "body: {body}");
    assert!(app.store.is_empty().await);
}

/// Years the stores cannot hold are rejected as bad input, not a server fault.
#[test_log::test(tokio::test)]
async fn create_year_out_of_range_is_bad_request() {
    let app = TestApp::new();

    let mut resp = app.create(Some("Party"), Some("-5000-01-01T00:00:00Z")).await;

    assert_eq!(resp.status_code, Some(StatusCode::BAD_REQUEST));
    let body = body_string(&mut resp).await;
    assert!(body.contains("-5000-01-01"), "body: {body}");
    assert!(app.store.is_empty().await);
}

/// Titles are trimmed and cut to 200 characters before storage.
#[test_log::test(tokio::test)]
async fn create_truncates_long_title() {
    let app = TestApp::new();
    let title = format!("  {}  ", "t".repeat(260));

    let slug = app.create_ok(&title, "2025-09-22T15:30:00Z").await;

    let stored = app
        .store
        .find_by_slug(&slug)
        .await
        .expect("store readable")
        .expect("event stored");
    assert_eq!(stored.title, "t".repeat(200));
}

/// Deadlines with an offset are stored as the equivalent UTC instant.
#[test_log::test(tokio::test)]
async fn create_normalizes_offset_to_utc() {
    let app = TestApp::new();

    let slug = app.create_ok("Launch", "2025-09-22T17:30:00+02:00").await;

    let stored = app
        .store
        .find_by_slug(&slug)
        .await
        .expect("store readable")
        .expect("event stored");
    assert_eq!(stored.until_utc.to_rfc3339(), "2025-09-22T15:30:00+00:00");
}

/// The configured slug length is honoured.
#[test_log::test(tokio::test)]
async fn create_uses_configured_slug_length() {
    let mut settings = super::helpers::test_config();
    settings.events.slug_length = 10;
    let app = TestApp::with_config(settings);

    let slug = app.create_ok("Party", "2025-09-22T15:30:00Z").await;

    assert!(is_slug_of_len(&slug, 10), "unexpected slug {slug}");
}

/// Every creation gets its own slug.
#[test_log::test(tokio::test)]
async fn create_many_gives_distinct_slugs() {
    let app = TestApp::new();
    let mut slugs = std::collections::HashSet::new();

    for i in 0..25 {
        let slug = app
            .create_ok(&format!("Event {i}"), "2026-01-01T00:00:00Z")
            .await;
        assert!(slugs.insert(slug), "duplicate slug issued");
    }

    assert_eq!(app.store.len().await, 25);
}
