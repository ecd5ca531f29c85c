use salvo::writing::Redirect;
use salvo::{Depot, Request, Response, Router, handler};
use serde::Deserialize;

use tminus_core::constants::{CREATE_ROUTE_COMPONENT, event_path};
use tminus_core::util::time::now_utc;
use tminus_service::event::{CreateEventInput, create_event};

use crate::config::get_config_from_depot;
use crate::error::AppResult;
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// Create event form payload
#[derive(Debug, Default, Deserialize)]
pub struct CreateEventForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub until_iso: Option<String>,
}

/// ## Summary
/// POST /create - stores a new event and redirects to its countdown page.
///
/// ## Side Effects
/// - Inserts one event into the store
///
/// ## Errors
/// Returns HTTP 400 if the title or deadline is missing or the deadline is not a date/time
/// Returns HTTP 500 if the store fails
#[handler]
async fn create(req: &mut Request, depot: &mut Depot, res: &mut Response) -> AppResult<()> {
    let form = match req.parse_form::<CreateEventForm>().await {
        Ok(form) => form,
        Err(e) => {
            tracing::debug!(error = %e, "Unreadable create form, treating as empty");
            CreateEventForm::default()
        }
    };

    let store = get_store_from_depot(depot)?;
    let settings = get_config_from_depot(depot)?;

    let input = CreateEventInput {
        title: form.title,
        until_iso: form.until_iso,
    };
    let event = create_event(
        store.as_ref(),
        &input,
        settings.events.slug_length,
        now_utc(),
    )
    .await?;

    res.render(Redirect::other(event_path(&event.slug)));
    Ok(())
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(CREATE_ROUTE_COMPONENT).post(create)
}
