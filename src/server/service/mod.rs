//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Owning the transactions and keyed locks of the parking
//!   lifecycle
//!
//! Operations that depend on the current time take it as an argument; controllers and
//! the scheduler pass `Utc::now()`.

pub mod admin;
pub mod auth;
pub mod export;
pub mod fare;
pub mod lot;
pub mod parking;
pub mod report;
pub mod search;
