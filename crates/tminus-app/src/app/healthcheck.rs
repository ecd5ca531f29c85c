use salvo::prelude::Json;
use salvo::{Router, handler};
use serde_json::{Value, json};

use tminus_core::constants::HEALTH_ROUTE_COMPONENT;

#[handler]
async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(HEALTH_ROUTE_COMPONENT).get(health)
}
