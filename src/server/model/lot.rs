//! Parking lot domain models and parameters.
//!
//! A lot owns a fixed number of spots created together with it. The occupancy views
//! combine a lot with counts taken from the spot registry.

use chrono::{DateTime, Utc};

use crate::model::lot::{AvailableLotDto, CreateLotDto, LotDto, UpdateLotDto};

/// Hourly rate applied when a lot is created without one.
pub const DEFAULT_RATE_PER_HOUR: f64 = 10.0;

/// Largest number of spots a single lot may have.
pub const MAX_CAPACITY: i32 = 10_000;

/// Parking lot with its pricing.
#[derive(Debug, Clone, PartialEq)]
pub struct Lot {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    /// Number of spots created for the lot. Fixed after creation.
    pub capacity: i32,
    /// Fee per chargeable hour, never negative.
    pub rate_per_hour: f64,
    pub created_at: DateTime<Utc>,
}

impl Lot {
    /// Converts an entity model to a lot domain model at the repository boundary.
    pub fn from_entity(entity: entity::parking_lot::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            location: entity.location,
            capacity: entity.capacity,
            rate_per_hour: entity.rate_per_hour,
            created_at: entity.created_at,
        }
    }
}

/// Lot together with its number of occupied spots, as listed to administrators.
#[derive(Debug, Clone)]
pub struct LotOccupancy {
    pub lot: Lot,
    pub occupied: u64,
}

impl LotOccupancy {
    pub fn into_dto(self) -> LotDto {
        let capacity = self.lot.capacity.max(0) as u64;

        LotDto {
            id: self.lot.id,
            name: self.lot.name,
            location: self.lot.location,
            capacity: self.lot.capacity,
            rate_per_hour: self.lot.rate_per_hour,
            occupied: self.occupied,
            available: capacity.saturating_sub(self.occupied),
        }
    }
}

/// Lot offered to drivers together with its free spot count.
#[derive(Debug, Clone)]
pub struct AvailableLot {
    pub lot: Lot,
    pub available: u64,
}

impl AvailableLot {
    pub fn into_dto(self) -> AvailableLotDto {
        AvailableLotDto {
            id: self.lot.id,
            name: self.lot.name,
            location: self.lot.location,
            rate_per_hour: self.lot.rate_per_hour,
            available_spots: self.available,
        }
    }
}

/// Parameters for creating a lot and its spots.
#[derive(Debug, Clone)]
pub struct CreateLotParams {
    pub name: String,
    pub location: Option<String>,
    pub capacity: i32,
    pub rate_per_hour: f64,
}

impl CreateLotParams {
    /// Converts a create request, applying the default rate when none is given.
    pub fn from_dto(dto: CreateLotDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            location: dto.location.filter(|l| !l.trim().is_empty()),
            capacity: dto.capacity,
            rate_per_hour: dto.rate_per_hour.unwrap_or(DEFAULT_RATE_PER_HOUR),
        }
    }

    /// Checks name, capacity and rate.
    ///
    /// # Returns
    /// - `Ok(())` - Parameters describe a valid lot
    /// - `Err(String)` - Human readable reason the lot was rejected
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Lot name must not be empty".to_string());
        }
        if self.capacity <= 0 {
            return Err("Capacity must be greater than zero".to_string());
        }
        if self.capacity > MAX_CAPACITY {
            return Err(format!("Capacity must not exceed {}", MAX_CAPACITY));
        }
        validate_rate(self.rate_per_hour)
    }
}

/// Parameters for updating a lot. Fields left as `None` keep their stored value.
///
/// Capacity is not updatable because spots are created once with the lot.
#[derive(Debug, Clone, Default)]
pub struct UpdateLotParams {
    pub name: Option<String>,
    pub location: Option<String>,
    pub rate_per_hour: Option<f64>,
}

impl UpdateLotParams {
    pub fn from_dto(dto: UpdateLotDto) -> Self {
        Self {
            name: dto.name.map(|n| n.trim().to_string()),
            location: dto.location,
            rate_per_hour: dto.rate_per_hour,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if matches!(self.name.as_deref(), Some("")) {
            return Err("Lot name must not be empty".to_string());
        }
        match self.rate_per_hour {
            Some(rate) => validate_rate(rate),
            None => Ok(()),
        }
    }
}

fn validate_rate(rate: f64) -> Result<(), String> {
    if !rate.is_finite() || rate < 0.0 {
        return Err("Rate per hour must be a non-negative number".to_string());
    }
    Ok(())
}
