//! Parking lot repository.
//!
//! Provides `LotRepository` for creating, updating, listing, searching and deleting
//! lots. Spot rows are owned by the `SpotRegistry`; deleting a lot removes its spots
//! through the foreign key cascade and detaches its sessions, which stay in the ledger.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    lot::{CreateLotParams, Lot, UpdateLotParams},
    search::SearchTerm,
};

/// Repository providing database operations for parking lots.
pub struct LotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LotRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a lot row. Spots are created separately by the caller.
    ///
    /// # Arguments
    /// - `params` - Validated lot parameters
    /// - `created_at` - Creation timestamp
    ///
    /// # Returns
    /// - `Ok(Lot)` - The inserted lot
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: CreateLotParams,
        created_at: DateTime<Utc>,
    ) -> Result<Lot, DbErr> {
        let entity = entity::parking_lot::ActiveModel {
            name: ActiveValue::Set(params.name),
            location: ActiveValue::Set(params.location),
            capacity: ActiveValue::Set(params.capacity),
            rate_per_hour: ActiveValue::Set(params.rate_per_hour),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Lot::from_entity(entity))
    }

    /// Finds a lot by ID.
    pub async fn find_by_id(&self, lot_id: i32) -> Result<Option<Lot>, DbErr> {
        let entity = entity::prelude::ParkingLot::find_by_id(lot_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Lot::from_entity))
    }

    /// Lists all lots ordered by ID.
    pub async fn list_all(&self) -> Result<Vec<Lot>, DbErr> {
        let entities = entity::prelude::ParkingLot::find()
            .order_by_asc(entity::parking_lot::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Lot::from_entity).collect())
    }

    /// Lists lots whose name or location contains the term, ordered by ID.
    ///
    /// Matching uses SQL `LIKE`, which SQLite compares case-insensitively for ASCII.
    pub async fn search(&self, term: &SearchTerm) -> Result<Vec<Lot>, DbErr> {
        let entities = entity::prelude::ParkingLot::find()
            .filter(
                Condition::any()
                    .add(entity::parking_lot::Column::Name.contains(term.as_str()))
                    .add(entity::parking_lot::Column::Location.contains(term.as_str())),
            )
            .order_by_asc(entity::parking_lot::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Lot::from_entity).collect())
    }

    /// Applies the provided fields to a lot.
    ///
    /// # Returns
    /// - `Ok(Some(Lot))` - The updated lot
    /// - `Ok(None)` - No lot with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, lot_id: i32, params: UpdateLotParams) -> Result<Option<Lot>, DbErr> {
        let Some(entity) = entity::prelude::ParkingLot::find_by_id(lot_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(location) = params.location {
            active.location = ActiveValue::Set(Some(location).filter(|l| !l.trim().is_empty()));
        }
        if let Some(rate) = params.rate_per_hour {
            active.rate_per_hour = ActiveValue::Set(rate);
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Lot::from_entity(updated)))
    }

    /// Deletes a lot. Spots and sessions are removed by cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - The lot was deleted
    /// - `Ok(false)` - No lot with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, lot_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ParkingLot::delete_by_id(lot_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts lots created at or after `since`.
    pub async fn count_created_since(&self, since: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::ParkingLot::find()
            .filter(entity::parking_lot::Column::CreatedAt.gte(since))
            .count(self.db)
            .await
    }
}
