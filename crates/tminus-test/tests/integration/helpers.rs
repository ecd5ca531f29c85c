#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Building the full router over a fresh in-memory store (one per test)
//! - Submitting the creation form
//! - Reading redirect targets and bodies back out of responses

use std::sync::Arc;

use salvo::http::StatusCode;
use salvo::http::header::LOCATION;
use salvo::prelude::*;
use salvo::test::{ResponseExt, TestClient};

use tminus_test::component::app::build_router;
use tminus_test::component::config::{
    DatabaseConfig, EventsConfig, LoggingConfig, ServerConfig, Settings,
};
use tminus_test::component::constants::{CREATE_ROUTE_PREFIX, EVENT_ROUTE_PREFIX};
use tminus_test::component::db::store::MemoryEventStore;

pub const BASE_URL: &str = "http://127.0.0.1:5800";

/// Test configuration - static struct instead of loading from the environment.
#[must_use]
pub fn test_config() -> Settings {
    Settings {
        database: DatabaseConfig {
            url: Some("memory://".to_string()),
            max_connections: 1,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5800,
        },
        events: EventsConfig {
            slug_length: 6,
            recent_limit: 8,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
    }
}

/// A router wired to its own empty store.
pub struct TestApp {
    pub service: Service,
    pub store: Arc<MemoryEventStore>,
}

impl TestApp {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    #[must_use]
    pub fn with_config(settings: Settings) -> Self {
        let store = Arc::new(MemoryEventStore::new());
        let service = Service::new(build_router(store.clone(), settings));
        Self { service, store }
    }

    /// Absolute URL for a path on the test server.
    #[must_use]
    pub fn url(path: &str) -> String {
        format!("{BASE_URL}{path}")
    }

    pub async fn get(&self, path: &str) -> Response {
        TestClient::get(Self::url(path)).send(&self.service).await
    }

    /// Posts the creation form; `None` leaves the field out entirely.
    pub async fn create(&self, title: Option<&str>, until_iso: Option<&str>) -> Response {
        let mut fields: Vec<(&str, &str)> = Vec::new();
        if let Some(title) = title {
            fields.push(("title", title));
        }
        if let Some(until_iso) = until_iso {
            fields.push(("until_iso", until_iso));
        }

        TestClient::post(Self::url(CREATE_ROUTE_PREFIX))
            .form(&fields)
            .send(&self.service)
            .await
    }

    /// Creates an event and returns its slug, asserting on the redirect.
    pub async fn create_ok(&self, title: &str, until_iso: &str) -> String {
        let resp = self.create(Some(title), Some(until_iso)).await;
        assert_eq!(resp.status_code, Some(StatusCode::SEE_OTHER));
        slug_from_redirect(&resp)
    }
}

/// Extracts the slug from a `/e/<slug>` `Location` header.
#[must_use]
pub fn slug_from_redirect(resp: &Response) -> String {
    let location = resp
        .headers()
        .get(LOCATION)
        .expect("redirect has a Location header")
        .to_str()
        .expect("Location is ASCII");

    location
        .strip_prefix(EVENT_ROUTE_PREFIX)
        .and_then(|rest| rest.strip_prefix('/'))
        .expect("Location points at an event page")
        .to_string()
}

/// Reads the body as a string.
pub async fn body_string(resp: &mut Response) -> String {
    resp.take_string().await.expect("readable body")
}

/// Reads the body as JSON.
pub async fn body_json(resp: &mut Response) -> serde_json::Value {
    resp.take_json::<serde_json::Value>()
        .await
        .expect("JSON body")
}

/// True for a 36-symbol slug of the given length.
#[must_use]
pub fn is_slug_of_len(slug: &str, len: usize) -> bool {
    slug.len() == len && slug.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}
