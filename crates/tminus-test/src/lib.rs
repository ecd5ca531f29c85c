//! tminus countdown server - integration test support.
//!
//! Re-exports the workspace crates so integration tests can use one
//! `tminus_test::component::` path for everything.

pub mod component {
    pub use tminus_core::{config, constants, error as core_error, util};
    pub use tminus_service::{error as service_error, event, slug};

    pub mod db {
        pub use tminus_db::db::*;
        pub use tminus_db::error::{DbError, DbResult};
        pub use tminus_db::model::{Event, NewEvent};
    }

    pub mod app {
        pub use tminus_app::build_router;
        pub use tminus_app::render;
    }
}
