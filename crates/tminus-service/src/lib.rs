//! Countdown event use cases: slug allocation and the create, view and list flows.

pub mod error;
pub mod event;
pub mod slug;
