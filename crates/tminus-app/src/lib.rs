//! HTTP surface of the tminus countdown service.

pub mod app;
pub mod config;
pub mod error;
pub mod render;
pub mod store_handler;

use std::sync::Arc;

use salvo::Router;
use salvo::logging::Logger;
use tminus_db::db::store::EventStore;

use crate::config::{ConfigHandler, Settings};
use crate::store_handler::StoreHandler;

/// ## Summary
/// Builds the full application router with the store and settings injected
/// into every request.
#[must_use]
pub fn build_router(store: Arc<dyn EventStore>, settings: Settings) -> Router {
    Router::new()
        .hoop(Logger::new())
        .hoop(StoreHandler { store })
        .hoop(ConfigHandler { settings })
        .push(app::routes())
}
