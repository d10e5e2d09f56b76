//! Request and response bodies exchanged over the HTTP API.

pub mod api;
pub mod export;
pub mod lot;
pub mod parking;
pub mod search;
pub mod summary;
pub mod user;
