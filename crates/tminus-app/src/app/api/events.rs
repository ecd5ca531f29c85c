use salvo::prelude::Json;
use salvo::{Depot, Request, Response, Router, handler};

use tminus_core::constants::API_EVENTS_ROUTE_COMPONENT;
use tminus_core::util::time::now_utc;
use tminus_service::event::view_event;

use crate::error::AppError;
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// GET /api/events/{slug} - the countdown payload as JSON.
///
/// ## Errors
/// Returns HTTP 404 with a JSON error body if the slug is unknown
/// Returns HTTP 500 if the store fails
#[handler]
async fn event_json(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let slug = req.param::<String>("slug").unwrap_or_default();

    let result = match get_store_from_depot(depot) {
        Ok(store) => view_event(store.as_ref(), &slug, now_utc())
            .await
            .map_err(AppError::from),
        Err(e) => Err(e),
    };

    match result {
        Ok(view) => res.render(Json(view)),
        Err(e) => e.render_json(res),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_EVENTS_ROUTE_COMPONENT)
        .push(Router::with_path("{slug}").get(event_json))
}
