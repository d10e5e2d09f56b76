use serde::{Deserialize, Serialize};

use crate::model::{lot::AvailableLotDto, parking::HistoryEntryDto};

/// Query string of the search endpoints (`?q=...`).
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserMatchDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub admin: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LotMatchDto {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    pub capacity: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SpotMatchDto {
    pub id: i32,
    pub label: String,
    pub lot_id: i32,
    pub available: bool,
}

/// Matches of an administrator search across accounts, lots and spots.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AdminSearchDto {
    pub query: String,
    pub users: Vec<UserMatchDto>,
    pub lots: Vec<LotMatchDto>,
    pub spots: Vec<SpotMatchDto>,
}

/// Matches of a driver search over lots and the driver's own history.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DriverSearchDto {
    pub lots: Vec<AvailableLotDto>,
    pub history: Vec<HistoryEntryDto>,
}
