use salvo::writing::Text;
use salvo::{Depot, Request, Response, Router, handler};

use tminus_core::constants::EVENT_ROUTE_COMPONENT;
use tminus_core::util::time::now_utc;
use tminus_service::event::view_event;

use crate::error::AppResult;
use crate::render::render_event;
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// GET /e/{slug} - the live countdown page.
///
/// ## Errors
/// Returns HTTP 404 if no event has this slug
/// Returns HTTP 500 if the store fails
#[handler]
async fn event_page(req: &mut Request, depot: &mut Depot, res: &mut Response) -> AppResult<()> {
    let slug = req.param::<String>("slug").unwrap_or_default();
    let store = get_store_from_depot(depot)?;

    let view = view_event(store.as_ref(), &slug, now_utc()).await?;

    res.render(Text::Html(render_event(&view)));
    Ok(())
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(EVENT_ROUTE_COMPONENT).push(Router::with_path("{slug}").get(event_page))
}
