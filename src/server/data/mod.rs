//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Repositories that take part in the parking transactions (`LotRepository`,
//! `SpotRegistry`, `SessionLedger`) are generic over `ConnectionTrait` and work the
//! same on a plain connection, a transaction or a savepoint.

pub mod export_job;
pub mod lot;
pub mod session;
pub mod spot;
pub mod user;

#[cfg(test)]
mod test;
