//! Admin dashboard summary and driver ranking.

use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{lot::LotRepository, session::SessionLedger, spot::SpotRegistry, user::UserRepository},
    error::AppError,
    model::summary::{AdminSummary, LotAnalytics, TopUser},
    service::fare::round2,
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Collects user, lot and occupancy totals plus bookings and revenue per lot.
    ///
    /// Every lot appears in the analytics, including lots without sessions. Revenue is
    /// the sum of fees of the lot's sessions, so active sessions contribute nothing.
    /// Sessions of deleted lots are left out.
    pub async fn summary(&self) -> Result<AdminSummary, AppError> {
        let total_users = UserRepository::new(self.db).count_drivers().await?;
        let lots = LotRepository::new(self.db).list_all().await?;
        let current_occupancy = SpotRegistry::new(self.db).count_all_occupied().await?;
        let sessions = SessionLedger::new(self.db).all().await?;

        let mut per_lot: HashMap<i32, (u64, f64)> = HashMap::new();
        for session in sessions {
            let Some(lot_id) = session.lot_id else {
                continue;
            };
            let stats = per_lot.entry(lot_id).or_default();
            stats.0 += 1;
            stats.1 += session.amount_paid;
        }

        let total_capacity = lots.iter().map(|l| i64::from(l.capacity)).sum();
        let lot_analytics = lots
            .iter()
            .map(|lot| {
                let (bookings, revenue) = per_lot.get(&lot.id).copied().unwrap_or_default();
                LotAnalytics {
                    name: lot.name.clone(),
                    bookings,
                    revenue: round2(revenue),
                }
            })
            .collect();

        Ok(AdminSummary {
            total_users,
            total_lots: lots.len() as u64,
            total_capacity,
            current_occupancy,
            lot_analytics,
        })
    }

    /// Ranks drivers by their number of sessions, most active first.
    ///
    /// Drivers without sessions are included with a count of zero. Ties are ordered by
    /// user ID.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of drivers returned
    pub async fn top_users(&self, limit: u64) -> Result<Vec<TopUser>, AppError> {
        let drivers = UserRepository::new(self.db).list_drivers().await?;
        let counts = SessionLedger::new(self.db).count_by_user().await?;

        let mut ranked: Vec<TopUser> = drivers
            .into_iter()
            .map(|user| TopUser {
                session_count: counts.get(&user.id).copied().unwrap_or(0),
                id: user.id,
                username: user.username,
                last_visit: user.last_visit,
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.session_count
                .cmp(&a.session_count)
                .then_with(|| a.id.cmp(&b.id))
        });
        ranked.truncate(usize::try_from(limit).unwrap_or(usize::MAX));

        Ok(ranked)
    }
}
