use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LotUsageDto {
    pub lot: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MonthlySpendDto {
    pub month: String,
    pub amount: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LotSpendDto {
    pub lot: String,
    pub amount: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserSummaryDto {
    pub usage_by_lot: Vec<LotUsageDto>,
    pub monthly_spend: Vec<MonthlySpendDto>,
    pub spend_by_lot: Vec<LotSpendDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LotAnalyticsDto {
    pub name: String,
    pub bookings: u64,
    pub revenue: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AdminSummaryDto {
    pub total_users: u64,
    pub total_lots: u64,
    pub total_capacity: i64,
    pub current_occupancy: u64,
    pub lot_analytics: Vec<LotAnalyticsDto>,
}

/// Driver ranked by number of sessions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TopUserDto {
    pub id: i32,
    pub username: String,
    pub session_count: u64,
    /// `None` when the driver never logged in.
    pub last_visit: Option<DateTime<Utc>>,
}
