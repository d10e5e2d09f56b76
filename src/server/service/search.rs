//! Free-text search for administrators and drivers.
//!
//! Terms are trimmed and lower-cased, then matched as substrings with SQL `LIKE`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{lot::LotRepository, session::SessionLedger, spot::SpotRegistry, user::UserRepository},
    error::AppError,
    model::{
        lot::AvailableLot,
        search::{AdminSearchResults, DriverSearchResults, SearchTerm},
    },
};

pub struct SearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SearchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches accounts by username or email, lots by name or location and spots by
    /// label.
    ///
    /// # Returns
    /// - `Ok(AdminSearchResults)` - Matches of each kind, ordered by ID
    /// - `Err(AppError::BadRequest)` - The query is blank
    pub async fn admin(&self, query: &str) -> Result<AdminSearchResults, AppError> {
        let term = SearchTerm::parse(query).ok_or_else(|| {
            AppError::BadRequest("Search query parameter 'q' is missing".to_string())
        })?;

        let users = UserRepository::new(self.db).search(&term).await?;
        let lots = LotRepository::new(self.db).search(&term).await?;
        let spots = SpotRegistry::new(self.db).search_by_label(&term).await?;

        Ok(AdminSearchResults {
            term,
            users,
            lots,
            spots,
        })
    }

    /// Searches lots by name or location and the driver's own sessions by lot name or
    /// vehicle number.
    ///
    /// A blank query matches nothing. Lot matches carry their free spot count and
    /// include full lots.
    pub async fn driver(&self, user_id: i32, query: &str) -> Result<DriverSearchResults, AppError> {
        let Some(term) = SearchTerm::parse(query) else {
            return Ok(DriverSearchResults::default());
        };

        let matched = LotRepository::new(self.db).search(&term).await?;
        let lot_ids: Vec<i32> = matched.iter().map(|lot| lot.id).collect();

        let registry = SpotRegistry::new(self.db);
        let mut lots = Vec::with_capacity(matched.len());
        for lot in matched {
            let available = registry.count_free(lot.id).await?;
            lots.push(AvailableLot { lot, available });
        }

        let history = SessionLedger::new(self.db)
            .search_by_user(user_id, &term, lot_ids)
            .await?;

        Ok(DriverSearchResults { lots, history })
    }
}
