use salvo::prelude::Json;
use salvo::{Router, handler};
use serde::Serialize;

use tminus_core::constants::API_TIME_ROUTE_COMPONENT;
use tminus_core::util::time::{format_utc, now_utc};

/// ## Summary
/// Server clock payload; clients compare it with their own clock to find skew.
#[derive(Debug, Serialize)]
pub struct TimeResponse {
    pub utc_now: String,
}

#[handler]
async fn utc_now() -> Json<TimeResponse> {
    Json(TimeResponse {
        utc_now: format_utc(&now_utc()),
    })
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_TIME_ROUTE_COMPONENT).get(utc_now)
}
