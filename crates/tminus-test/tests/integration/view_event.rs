//! GET /e/{slug}

use salvo::http::StatusCode;

use super::helpers::{TestApp, body_string};
use tminus_test::component::constants::event_path;

/// A created event renders its title, the normalized deadline and the server clock.
#[test_log::test(tokio::test)]
async fn view_shows_countdown_data() {
    let app = TestApp::new();
    let slug = app.create_ok("Party", "2025-09-22T15:30:00").await;

    let mut resp = app.get(&event_path(&slug)).await;

    assert_eq!(resp.status_code, Some(StatusCode::OK));
    let body = body_string(&mut resp).await;
    assert!(body.contains("<h1>Party</h1>"), "body: {body}");
    assert!(body.contains("data-until=\"2025-09-22T15:30:00Z\""));
    assert!(body.contains("data-server-now=\""));
}

/// Unknown slugs are 404s.
#[test_log::test(tokio::test)]
async fn view_unknown_slug_is_not_found() {
    let app = TestApp::new();

    let resp = app.get(&event_path("zzzzzz")).await;

    assert_eq!(resp.status_code, Some(StatusCode::NOT_FOUND));
}

/// Slugs outside the alphabet never reach the store and are 404s.
#[test_log::test(tokio::test)]
async fn view_malformed_slug_is_not_found() {
    let app = TestApp::new();

    let resp = app.get(&event_path("NOT_A_SLUG")).await;

    assert_eq!(resp.status_code, Some(StatusCode::NOT_FOUND));
}

/// Titles are HTML-escaped on the countdown page.
#[test_log::test(tokio::test)]
async fn view_escapes_title() {
    let app = TestApp::new();
    let slug = app
        .create_ok("<img src=x onerror=alert(1)>", "2025-09-22T15:30:00Z")
        .await;

    let mut resp = app.get(&event_path(&slug)).await;

    let body = body_string(&mut resp).await;
    assert!(!body.contains("<img src=x"));
    assert!(body.contains("&lt;img src=x onerror=alert(1)&gt;"));
}
