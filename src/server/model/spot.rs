//! Parking spot domain models.
//!
//! Spots carry the occupancy flag that the allocator claims and the fare calculator
//! releases. Both transitions report their outcome instead of failing so the caller
//! decides whether a lost race is an error.

use chrono::{DateTime, Utc};

use crate::model::lot::SpotStatusDto;

/// Returns the label of the `n`th spot of a lot, counting from one.
pub fn spot_label(n: i32) -> String {
    format!("SPOT-{}", n)
}

/// A single parking spot.
///
/// `occupied` is true exactly when `current_session_id` points at an active session.
#[derive(Debug, Clone, PartialEq)]
pub struct Spot {
    pub id: i32,
    pub lot_id: i32,
    pub label: String,
    pub occupied: bool,
    pub current_session_id: Option<i32>,
}

impl Spot {
    pub fn from_entity(entity: entity::parking_spot::Model) -> Self {
        Self {
            id: entity.id,
            lot_id: entity.lot_id,
            label: entity.label,
            occupied: entity.occupied,
            current_session_id: entity.current_session_id,
        }
    }
}

/// Result of trying to mark a free spot occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// This caller flipped the spot from free to occupied.
    Claimed,
    /// The spot was already occupied when the update ran.
    AlreadyTaken,
}

/// Result of trying to free an occupied spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    Released,
    /// The spot was already free.
    NotOccupied,
}

/// Spot as shown to administrators, with the occupying session's details.
#[derive(Debug, Clone)]
pub struct SpotStatus {
    pub spot: Spot,
    pub vehicle_number: Option<String>,
    /// Username of the driver holding the spot.
    pub parked_by: Option<String>,
    /// Entry time of the active session.
    pub since: Option<DateTime<Utc>>,
}

impl SpotStatus {
    pub fn into_dto(self) -> SpotStatusDto {
        SpotStatusDto {
            id: self.spot.id,
            label: self.spot.label,
            occupied: self.spot.occupied,
            vehicle_number: self.vehicle_number,
            parked_by: self.parked_by,
            since: self.since,
        }
    }
}
