//! JSON endpoints: /api/time, /api/events/{slug} and /health

use chrono::{DateTime, Utc};
use salvo::http::StatusCode;
use serde::Deserialize;

use super::helpers::{TestApp, body_json};
use tminus_test::component::constants::{API_EVENTS_ROUTE_PREFIX, API_TIME_ROUTE_PREFIX};

#[derive(Debug, Deserialize)]
struct TimePayload {
    utc_now: String,
}

/// The time endpoint returns the current instant, `Z`-suffixed.
#[test_log::test(tokio::test)]
async fn api_time_returns_utc_now() {
    let app = TestApp::new();
    let before = Utc::now();

    let mut resp = app.get(API_TIME_ROUTE_PREFIX).await;

    assert_eq!(resp.status_code, Some(StatusCode::OK));
    let payload: TimePayload =
        serde_json::from_value(body_json(&mut resp).await).expect("time payload");
    assert!(payload.utc_now.ends_with('Z'), "{}", payload.utc_now);

    let reported: DateTime<Utc> = payload.utc_now.parse().expect("ISO-8601 instant");
    let drift = (reported - before).num_seconds().abs();
    assert!(drift < 5, "server clock drifted {drift}s");
}

/// The health endpoint is a static liveness payload.
#[test_log::test(tokio::test)]
async fn health_returns_ok() {
    let app = TestApp::new();

    let mut resp = app.get("/health").await;

    assert_eq!(resp.status_code, Some(StatusCode::OK));
    assert_eq!(body_json(&mut resp).await, serde_json::json!({ "ok": true }));
}

/// Event JSON mirrors what the countdown page shows.
#[test_log::test(tokio::test)]
async fn api_event_returns_countdown_payload() {
    let app = TestApp::new();
    let slug = app.create_ok("Party", "2025-09-22T17:30:00+02:00").await;

    let mut resp = app.get(&format!("{API_EVENTS_ROUTE_PREFIX}/{slug}")).await;

    assert_eq!(resp.status_code, Some(StatusCode::OK));
    let body = body_json(&mut resp).await;
    assert_eq!(body["slug"], slug.as_str());
    assert_eq!(body["title"], "Party");
    assert_eq!(body["until_iso"], "2025-09-22T15:30:00Z");
    assert!(body["server_utc_now"].as_str().is_some_and(|s| s.ends_with('Z')));
    assert!(body["created_iso"].as_str().is_some_and(|s| s.ends_with('Z')));
}

/// Unknown slugs are a JSON 404.
#[test_log::test(tokio::test)]
async fn api_event_unknown_slug_is_not_found() {
    let app = TestApp::new();

    let mut resp = app.get(&format!("{API_EVENTS_ROUTE_PREFIX}/zzzzzz")).await;

    assert_eq!(resp.status_code, Some(StatusCode::NOT_FOUND));
    let body = body_json(&mut resp).await;
    assert_eq!(body["error"], "Event not found.");
}
