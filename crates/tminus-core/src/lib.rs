//! Shared building blocks for the tminus countdown service.
//!
//! Holds everything that needs no database or HTTP stack: configuration,
//! route constants, the core error type, slug generation and UTC time handling.

pub mod config;
pub mod constants;
pub mod error;
pub mod util;
