mod events;
mod time;

use salvo::Router;

use tminus_core::constants::API_ROUTE_COMPONENT;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(time::routes())
        .push(events::routes())
}
