//! GET /

use salvo::http::StatusCode;

use super::helpers::{TestApp, body_string};

/// The landing page shows the form even with no events.
#[test_log::test(tokio::test)]
async fn index_renders_empty_state() {
    let app = TestApp::new();

    let mut resp = app.get("/").await;

    assert_eq!(resp.status_code, Some(StatusCode::OK));
    let body = body_string(&mut resp).await;
    assert!(body.contains("action=\"/create\""));
    assert!(body.contains("No countdowns yet."));
}

/// Only the configured number of recent events is listed, newest first.
#[test_log::test(tokio::test)]
async fn index_lists_recent_events() {
    let app = TestApp::new();
    let mut slugs = Vec::new();
    for i in 0..10 {
        slugs.push(
            app.create_ok(&format!("Event number {i}"), "2026-01-01T00:00:00Z")
                .await,
        );
        // Distinct creation instants keep the ordering deterministic
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }

    let mut resp = app.get("/").await;
    let body = body_string(&mut resp).await;

    assert_eq!(body.matches("<li>").count(), 8);
    assert!(body.contains(&format!("/e/{}", slugs[9])));
    assert!(!body.contains(&format!("/e/{}\"", slugs[0])));

    let newest = body.find("Event number 9").expect("newest listed");
    let older = body.find("Event number 2").expect("eighth newest listed");
    assert!(newest < older);
}
