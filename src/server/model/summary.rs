//! Aggregated usage views for drivers and administrators.

use chrono::{DateTime, Utc};

use crate::model::summary::{
    AdminSummaryDto, LotAnalyticsDto, LotSpendDto, LotUsageDto, MonthlySpendDto, TopUserDto,
    UserSummaryDto,
};

/// Usage of a single driver, grouped three ways.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserSummary {
    /// Sessions per lot name, most used first.
    pub usage_by_lot: Vec<(String, u64)>,
    /// Completed spend per `YYYY-MM` month, oldest first.
    pub monthly_spend: Vec<(String, f64)>,
    /// Completed spend per lot name, highest first.
    pub spend_by_lot: Vec<(String, f64)>,
}

impl UserSummary {
    pub fn into_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            usage_by_lot: self
                .usage_by_lot
                .into_iter()
                .map(|(lot, count)| LotUsageDto { lot, count })
                .collect(),
            monthly_spend: self
                .monthly_spend
                .into_iter()
                .map(|(month, amount)| MonthlySpendDto { month, amount })
                .collect(),
            spend_by_lot: self
                .spend_by_lot
                .into_iter()
                .map(|(lot, amount)| LotSpendDto { lot, amount })
                .collect(),
        }
    }
}

/// Bookings and revenue of one lot.
#[derive(Debug, Clone, PartialEq)]
pub struct LotAnalytics {
    pub name: String,
    pub bookings: u64,
    pub revenue: f64,
}

/// Totals shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSummary {
    /// Number of non-admin accounts.
    pub total_users: u64,
    pub total_lots: u64,
    pub total_capacity: i64,
    /// Spots occupied right now across all lots.
    pub current_occupancy: u64,
    pub lot_analytics: Vec<LotAnalytics>,
}

impl AdminSummary {
    pub fn into_dto(self) -> AdminSummaryDto {
        AdminSummaryDto {
            total_users: self.total_users,
            total_lots: self.total_lots,
            total_capacity: self.total_capacity,
            current_occupancy: self.current_occupancy,
            lot_analytics: self
                .lot_analytics
                .into_iter()
                .map(|l| LotAnalyticsDto {
                    name: l.name,
                    bookings: l.bookings,
                    revenue: l.revenue,
                })
                .collect(),
        }
    }
}

/// Driver with their session count, as ranked on the admin dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct TopUser {
    pub id: i32,
    pub username: String,
    /// Sessions of any status.
    pub session_count: u64,
    pub last_visit: Option<DateTime<Utc>>,
}

impl TopUser {
    pub fn into_dto(self) -> TopUserDto {
        TopUserDto {
            id: self.id,
            username: self.username,
            session_count: self.session_count,
            last_visit: self.last_visit,
        }
    }
}
