use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lot as seen by administrators, with live occupancy.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LotDto {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    pub capacity: i32,
    pub rate_per_hour: f64,
    pub occupied: u64,
    pub available: u64,
}

/// Lot offered to drivers; only lots with a free spot are listed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AvailableLotDto {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    pub rate_per_hour: f64,
    pub available_spots: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateLotDto {
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    pub capacity: i32,
    #[serde(default)]
    pub rate_per_hour: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct UpdateLotDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub rate_per_hour: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SpotStatusDto {
    pub id: i32,
    pub label: String,
    pub occupied: bool,
    pub vehicle_number: Option<String>,
    pub parked_by: Option<String>,
    pub since: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FreeSpotsDto {
    pub lot_id: i32,
    pub free_spots: u64,
}
