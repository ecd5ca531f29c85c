use salvo::writing::Text;
use salvo::{Depot, Response, handler};

use tminus_core::util::time::{format_utc, now_utc};
use tminus_service::event::list_recent;

use crate::config::get_config_from_depot;
use crate::error::AppResult;
use crate::render::{IndexPage, render_index};
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// GET / - creation form plus the most recently created events.
#[handler]
pub async fn index(depot: &mut Depot, res: &mut Response) -> AppResult<()> {
    let store = get_store_from_depot(depot)?;
    let settings = get_config_from_depot(depot)?;

    let events = list_recent(store.as_ref(), settings.events.recent_limit).await?;
    let page = IndexPage {
        events,
        server_utc_now: format_utc(&now_utc()),
    };

    res.render(Text::Html(render_index(&page)));
    Ok(())
}
