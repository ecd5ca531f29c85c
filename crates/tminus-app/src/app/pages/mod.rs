mod create;
mod event;
mod index;

use salvo::Router;

#[must_use]
pub fn routes() -> Router {
    Router::new()
        .get(index::index)
        .push(create::routes())
        .push(event::routes())
}
