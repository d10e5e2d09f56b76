//! Parking session domain models and parameters.
//!
//! A session is opened ACTIVE when the allocator claims a spot and becomes COMPLETED
//! exactly once when the driver unparks. COMPLETED is terminal.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::fmt;

use crate::model::parking::{HistoryEntryDto, ParkDto, ParkedDto, UnparkedDto};

/// Lifecycle state of a parking session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    Active,
    Completed,
}

impl SessionStatus {
    /// Value stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
        }
    }

    /// Parses a stored status.
    ///
    /// # Returns
    /// - `Ok(SessionStatus)` - Known status value
    /// - `Err(DbErr::Custom)` - The column holds an unknown value
    pub fn parse(value: &str) -> Result<Self, DbErr> {
        match value {
            "ACTIVE" => Ok(Self::Active),
            "COMPLETED" => Ok(Self::Completed),
            other => Err(DbErr::Custom(format!(
                "Unknown parking session status: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One visit of a vehicle to a spot.
///
/// Sessions outlive their lot: deleting a lot clears `lot_id` and `spot_id`, while the
/// lot name and spot label recorded at park time stay on the row.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingSession {
    pub id: i32,
    pub user_id: i32,
    /// `None` once the lot has been deleted.
    pub lot_id: Option<i32>,
    /// `None` once the lot has been deleted.
    pub spot_id: Option<i32>,
    pub lot_name: String,
    pub spot_label: String,
    pub vehicle_number: String,
    pub entry_time: DateTime<Utc>,
    /// Set when the session is completed.
    pub exit_time: Option<DateTime<Utc>>,
    /// Fee charged on completion, 0.0 while active.
    pub amount_paid: f64,
    pub status: SessionStatus,
}

impl ParkingSession {
    /// Converts an entity model to a session domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(ParkingSession)` - Converted session
    /// - `Err(DbErr::Custom)` - Stored status is not a known value
    pub fn from_entity(entity: entity::parking_session::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            lot_id: entity.lot_id,
            spot_id: entity.spot_id,
            lot_name: entity.lot_name,
            spot_label: entity.spot_label,
            vehicle_number: entity.vehicle_number,
            entry_time: entity.entry_time,
            exit_time: entity.exit_time,
            amount_paid: entity.amount_paid,
            status: SessionStatus::parse(&entity.status)?,
        })
    }

    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }
}

/// Parameters for inserting a new ACTIVE session.
#[derive(Debug, Clone)]
pub struct OpenSessionParams {
    pub user_id: i32,
    pub lot_id: i32,
    pub spot_id: i32,
    pub lot_name: String,
    pub spot_label: String,
    pub vehicle_number: String,
    pub entry_time: DateTime<Utc>,
}

/// Parameters of a park request from an authenticated user.
#[derive(Debug, Clone)]
pub struct ParkParams {
    pub user_id: i32,
    pub lot_id: i32,
    pub vehicle_number: String,
}

impl ParkParams {
    /// Binds a park request to the user resolved from the session.
    pub fn from_dto(user_id: i32, dto: ParkDto) -> Self {
        Self {
            user_id,
            lot_id: dto.lot_id,
            vehicle_number: dto.vehicle_number.trim().to_string(),
        }
    }
}

/// Result of a successful park.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkedSession {
    pub session_id: i32,
    pub spot_id: i32,
    pub spot_label: String,
    pub vehicle_number: String,
    pub entry_time: DateTime<Utc>,
}

impl ParkedSession {
    pub fn into_dto(self) -> ParkedDto {
        ParkedDto {
            session_id: self.session_id,
            spot_label: self.spot_label,
            vehicle_number: self.vehicle_number,
            entry_time: self.entry_time,
        }
    }
}

/// Result of a successful unpark.
#[derive(Debug, Clone, PartialEq)]
pub struct UnparkedSession {
    pub session_id: i32,
    /// Elapsed time rounded to two decimals.
    pub duration_hours: f64,
    pub amount_paid: f64,
    pub spot_label: String,
}

impl UnparkedSession {
    pub fn into_dto(self) -> UnparkedDto {
        UnparkedDto {
            duration_hours: self.duration_hours,
            amount_paid: self.amount_paid,
            spot_label: self.spot_label,
        }
    }
}

/// Session joined with the names a driver recognizes.
///
/// `lot_name` is the lot's current name, or the name recorded at park time when the
/// lot no longer exists.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub session: ParkingSession,
    pub lot_name: String,
    pub spot_label: String,
}

impl HistoryEntry {
    pub fn into_dto(self) -> HistoryEntryDto {
        HistoryEntryDto {
            id: self.session.id,
            lot_name: self.lot_name,
            spot_label: self.spot_label,
            vehicle_number: self.session.vehicle_number,
            entry_time: self.session.entry_time,
            exit_time: self.session.exit_time,
            amount_paid: self.session.amount_paid,
            status: self.session.status.to_string(),
        }
    }
}
