//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Status columns stored as strings are parsed into enums here, so the service layer
//! never compares raw status text.

pub mod export;
pub mod lot;
pub mod report;
pub mod search;
pub mod session;
pub mod spot;
pub mod summary;
pub mod user;
