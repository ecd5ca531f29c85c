mod api;
mod create_event;
mod helpers;
mod index;
mod view_event;
