//! Spot registry for occupancy state.
//!
//! This module provides the `SpotRegistry`, the durable table of spots per lot. The two
//! state transitions, `claim` and `release`, are single conditional updates so that
//! concurrent callers racing for the same spot are arbitrated by the database: exactly
//! one update matches the row and every other caller sees zero affected rows.
//!
//! The registry is generic over `ConnectionTrait` so the allocator can run it inside
//! its transaction and savepoints.

use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    search::SearchTerm,
    spot::{spot_label, ClaimOutcome, ReleaseOutcome, Spot},
};

/// Repository providing occupancy operations on parking spots.
pub struct SpotRegistry<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpotRegistry<'a, C> {
    /// Creates a new SpotRegistry over a connection or transaction.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    ///
    /// # Returns
    /// - `SpotRegistry` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the spots of a newly created lot.
    ///
    /// Creates `capacity` free spots labelled `SPOT-1` through `SPOT-{capacity}`.
    ///
    /// # Arguments
    /// - `lot_id` - ID of the owning lot
    /// - `capacity` - Number of spots to create
    ///
    /// # Returns
    /// - `Ok(())` - All spots inserted
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_for_lot(&self, lot_id: i32, capacity: i32) -> Result<(), DbErr> {
        if capacity <= 0 {
            return Ok(());
        }

        let spots = (1..=capacity).map(|n| entity::parking_spot::ActiveModel {
            lot_id: ActiveValue::Set(lot_id),
            label: ActiveValue::Set(spot_label(n)),
            occupied: ActiveValue::Set(false),
            current_session_id: ActiveValue::Set(None),
            ..Default::default()
        });

        entity::prelude::ParkingSpot::insert_many(spots)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Finds a spot by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Spot))` - Spot found
    /// - `Ok(None)` - No spot with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, spot_id: i32) -> Result<Option<Spot>, DbErr> {
        let entity = entity::prelude::ParkingSpot::find_by_id(spot_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Spot::from_entity))
    }

    /// Lists every spot of a lot ordered by ID.
    pub async fn list_by_lot(&self, lot_id: i32) -> Result<Vec<Spot>, DbErr> {
        let entities = entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::LotId.eq(lot_id))
            .order_by_asc(entity::parking_spot::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Spot::from_entity).collect())
    }

    /// Lists spots of any lot whose label contains the term, ordered by ID.
    pub async fn search_by_label(&self, term: &SearchTerm) -> Result<Vec<Spot>, DbErr> {
        let entities = entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::Label.contains(term.as_str()))
            .order_by_asc(entity::parking_spot::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Spot::from_entity).collect())
    }

    /// Lists the free spots of a lot ordered by ID.
    ///
    /// The ordering is the allocator's tie-break: when several spots are free the one
    /// with the lowest ID is tried first. The result is a snapshot; any spot in it may
    /// be claimed by someone else before the caller's own claim runs.
    ///
    /// # Arguments
    /// - `lot_id` - ID of the lot
    ///
    /// # Returns
    /// - `Ok(Vec<Spot>)` - Free spots, empty when the lot is full or unknown
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_free(&self, lot_id: i32) -> Result<Vec<Spot>, DbErr> {
        let entities = entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::LotId.eq(lot_id))
            .filter(entity::parking_spot::Column::Occupied.eq(false))
            .order_by_asc(entity::parking_spot::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Spot::from_entity).collect())
    }

    /// Counts the free spots of a lot.
    pub async fn count_free(&self, lot_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::LotId.eq(lot_id))
            .filter(entity::parking_spot::Column::Occupied.eq(false))
            .count(self.db)
            .await
    }

    /// Counts the occupied spots of a lot.
    pub async fn count_occupied(&self, lot_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::LotId.eq(lot_id))
            .filter(entity::parking_spot::Column::Occupied.eq(true))
            .count(self.db)
            .await
    }

    /// Counts occupied spots across all lots.
    pub async fn count_all_occupied(&self) -> Result<u64, DbErr> {
        entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::Occupied.eq(true))
            .count(self.db)
            .await
    }

    /// Marks a free spot occupied by the given session.
    ///
    /// Runs `UPDATE ... SET occupied = true, current_session_id = ? WHERE id = ? AND
    /// occupied = false`. Whichever concurrent caller's update matches the row wins;
    /// the rest observe zero affected rows and get `AlreadyTaken`.
    ///
    /// # Arguments
    /// - `spot_id` - ID of the spot to claim
    /// - `session_id` - ID of the session that will occupy the spot
    ///
    /// # Returns
    /// - `Ok(ClaimOutcome::Claimed)` - This call occupied the spot
    /// - `Ok(ClaimOutcome::AlreadyTaken)` - The spot was occupied already
    /// - `Err(DbErr::RecordNotFound)` - No spot with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn claim(&self, spot_id: i32, session_id: i32) -> Result<ClaimOutcome, DbErr> {
        let result = entity::prelude::ParkingSpot::update_many()
            .col_expr(entity::parking_spot::Column::Occupied, Expr::value(true))
            .col_expr(
                entity::parking_spot::Column::CurrentSessionId,
                Expr::value(Some(session_id)),
            )
            .filter(entity::parking_spot::Column::Id.eq(spot_id))
            .filter(entity::parking_spot::Column::Occupied.eq(false))
            .exec(self.db)
            .await?;

        if result.rows_affected == 1 {
            return Ok(ClaimOutcome::Claimed);
        }

        self.ensure_exists(spot_id).await?;
        Ok(ClaimOutcome::AlreadyTaken)
    }

    /// Frees an occupied spot and clears its session reference.
    ///
    /// Mirror of `claim`: a conditional update on `occupied = true`.
    ///
    /// # Returns
    /// - `Ok(ReleaseOutcome::Released)` - This call freed the spot
    /// - `Ok(ReleaseOutcome::NotOccupied)` - The spot was already free
    /// - `Err(DbErr::RecordNotFound)` - No spot with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn release(&self, spot_id: i32) -> Result<ReleaseOutcome, DbErr> {
        let result = entity::prelude::ParkingSpot::update_many()
            .col_expr(entity::parking_spot::Column::Occupied, Expr::value(false))
            .col_expr(
                entity::parking_spot::Column::CurrentSessionId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::parking_spot::Column::Id.eq(spot_id))
            .filter(entity::parking_spot::Column::Occupied.eq(true))
            .exec(self.db)
            .await?;

        if result.rows_affected == 1 {
            return Ok(ReleaseOutcome::Released);
        }

        self.ensure_exists(spot_id).await?;
        Ok(ReleaseOutcome::NotOccupied)
    }

    async fn ensure_exists(&self, spot_id: i32) -> Result<(), DbErr> {
        let exists = entity::prelude::ParkingSpot::find_by_id(spot_id)
            .count(self.db)
            .await?
            > 0;

        if exists {
            Ok(())
        } else {
            Err(DbErr::RecordNotFound(format!(
                "Parking spot {} not found",
                spot_id
            )))
        }
    }
}
