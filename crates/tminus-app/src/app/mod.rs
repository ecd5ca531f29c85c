mod api;
mod healthcheck;
mod pages;

use salvo::Router;

/// ## Summary
/// Constructs the router for pages, the JSON API and the health check.
#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(pages::routes())
        .push(api::routes())
        .push(healthcheck::routes())
}
