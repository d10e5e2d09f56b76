//! Parking lot factory creating a lot together with one spot per capacity unit.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Default number of spots created for a factory lot.
pub const DEFAULT_CAPACITY: i32 = 3;

/// Default hourly rate for a factory lot.
pub const DEFAULT_RATE_PER_HOUR: f64 = 10.0;

/// Factory for creating test lots with customizable fields.
///
/// Spots are labelled `SPOT-1` to `SPOT-{capacity}` and inserted in ascending order, so
/// their ids ascend with their labels.
///
/// # Example
///
/// ```rust,ignore
/// let (lot, spots) = LotFactory::new(&db)
///     .name("Downtown")
///     .capacity(2)
///     .build()
///     .await?;
/// ```
pub struct LotFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    location: Option<String>,
    capacity: i32,
    rate_per_hour: f64,
    created_at: DateTime<Utc>,
}

impl<'a> LotFactory<'a> {
    /// Creates a new LotFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Lot {id}"` where id is auto-incremented
    /// - location: `Some("Test Street {id}")`
    /// - capacity: [`DEFAULT_CAPACITY`]
    /// - rate_per_hour: [`DEFAULT_RATE_PER_HOUR`]
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Lot {}", id),
            location: Some(format!("Test Street {}", id)),
            capacity: DEFAULT_CAPACITY,
            rate_per_hour: DEFAULT_RATE_PER_HOUR,
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn rate_per_hour(mut self, rate_per_hour: f64) -> Self {
        self.rate_per_hour = rate_per_hour;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the lot and its spots.
    ///
    /// # Returns
    /// - `Ok((lot, spots))` - Created lot and its free spots in id order
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(
        self,
    ) -> Result<(entity::parking_lot::Model, Vec<entity::parking_spot::Model>), DbErr> {
        let lot = entity::parking_lot::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            location: ActiveValue::Set(self.location),
            capacity: ActiveValue::Set(self.capacity),
            rate_per_hour: ActiveValue::Set(self.rate_per_hour),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await?;

        let mut spots = Vec::with_capacity(self.capacity.max(0) as usize);
        for number in 1..=self.capacity {
            let spot = entity::parking_spot::ActiveModel {
                id: ActiveValue::NotSet,
                lot_id: ActiveValue::Set(lot.id),
                label: ActiveValue::Set(format!("SPOT-{}", number)),
                occupied: ActiveValue::Set(false),
                current_session_id: ActiveValue::Set(None),
            }
            .insert(self.db)
            .await?;
            spots.push(spot);
        }

        Ok((lot, spots))
    }
}

/// Creates a lot with default values and its spots.
pub async fn create_lot(
    db: &DatabaseConnection,
) -> Result<(entity::parking_lot::Model, Vec<entity::parking_spot::Model>), DbErr> {
    LotFactory::new(db).build().await
}
