use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ParkDto {
    pub lot_id: i32,
    pub vehicle_number: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ParkedDto {
    pub session_id: i32,
    pub spot_label: String,
    pub vehicle_number: String,
    pub entry_time: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UnparkedDto {
    pub duration_hours: f64,
    pub amount_paid: f64,
    pub spot_label: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HistoryEntryDto {
    pub id: i32,
    pub lot_name: String,
    pub spot_label: String,
    pub vehicle_number: String,
    pub entry_time: DateTime<Utc>,
    pub exit_time: Option<DateTime<Utc>>,
    pub amount_paid: f64,
    pub status: String,
}
