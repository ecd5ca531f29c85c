//! Persistence for countdown events.
//!
//! The rest of the service only sees [`db::store::EventStore`]; which backend
//! sits behind it is decided once at startup from the database URL.

pub mod db;
pub mod error;
pub mod model;
