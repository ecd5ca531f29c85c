/// Route component constants shared across crates
pub const CREATE_ROUTE_COMPONENT: &str = "create";
pub const CREATE_ROUTE_PREFIX: &str = const_str::concat!("/", CREATE_ROUTE_COMPONENT);

pub const EVENT_ROUTE_COMPONENT: &str = "e";
pub const EVENT_ROUTE_PREFIX: &str = const_str::concat!("/", EVENT_ROUTE_COMPONENT);

pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const API_TIME_ROUTE_COMPONENT: &str = "time";
pub const API_TIME_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", API_TIME_ROUTE_COMPONENT);

pub const API_EVENTS_ROUTE_COMPONENT: &str = "events";
pub const API_EVENTS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", API_EVENTS_ROUTE_COMPONENT);

pub const HEALTH_ROUTE_COMPONENT: &str = "health";

/// Characters a slug may contain.
pub const SLUG_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
/// Length of a freshly allocated slug before any collision growth.
pub const DEFAULT_SLUG_LENGTH: usize = 6;
/// Upper bound imposed by the `events.slug` column.
pub const MAX_SLUG_LENGTH: usize = 40;
/// Titles are cut to this many characters before storage.
pub const MAX_TITLE_CHARS: usize = 200;
/// Number of events shown on the landing page.
pub const DEFAULT_RECENT_LIMIT: i64 = 8;

/// ## Summary
/// Builds the public view path for an event slug, e.g. `/e/abc123`.
#[must_use]
pub fn event_path(slug: &str) -> String {
    format!("{EVENT_ROUTE_PREFIX}/{slug}")
}
