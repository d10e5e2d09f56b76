//! HTTP handlers.
//!
//! Every handler resolves the caller through `AuthGuard` before touching a service,
//! converts request DTOs into parameters and service results back into DTOs.

pub mod admin;
pub mod auth;
pub mod export;
pub mod lot;
pub mod parking;
pub mod user;
