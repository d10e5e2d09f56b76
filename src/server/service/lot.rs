//! Lot administration.
//!
//! Creation inserts the lot and all of its spots in one transaction. Deletion holds the
//! lot's exclusive lock around the occupancy check and the delete so no park can slip
//! in between them.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashMap;

use crate::server::{
    data::{lot::LotRepository, session::SessionLedger, spot::SpotRegistry},
    error::{parking::ParkingError, AppError},
    model::{
        lot::{AvailableLot, CreateLotParams, Lot, LotOccupancy, UpdateLotParams},
        spot::SpotStatus,
    },
    util::lock::ParkingLocks,
};

pub struct LotService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a ParkingLocks,
}

impl<'a> LotService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a ParkingLocks) -> Self {
        Self { db, locks }
    }

    /// Creates a lot with `capacity` free spots.
    ///
    /// # Returns
    /// - `Ok(Lot)` - Lot and spots created
    /// - `Err(AppError::BadRequest)` - Invalid name, capacity or rate
    pub async fn create(
        &self,
        params: CreateLotParams,
        now: DateTime<Utc>,
    ) -> Result<Lot, AppError> {
        params.validate().map_err(AppError::BadRequest)?;

        let txn = self.db.begin().await?;

        let lot = LotRepository::new(&txn).create(params, now).await?;
        SpotRegistry::new(&txn)
            .create_for_lot(lot.id, lot.capacity)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Created lot {} ({}) with {} spots",
            lot.id,
            lot.name,
            lot.capacity
        );

        Ok(lot)
    }

    /// Updates name, location or rate of a lot.
    ///
    /// # Returns
    /// - `Ok(Lot)` - The updated lot
    /// - `Err(AppError::BadRequest)` - Invalid name or rate
    /// - `Err(ParkingError::LotNotFound)` - Unknown lot
    pub async fn update(&self, lot_id: i32, params: UpdateLotParams) -> Result<Lot, AppError> {
        params.validate().map_err(AppError::BadRequest)?;

        let lot = LotRepository::new(self.db)
            .update(lot_id, params)
            .await?
            .ok_or(ParkingError::LotNotFound(lot_id))?;

        tracing::info!("Updated lot {}", lot_id);

        Ok(lot)
    }

    /// Deletes a lot that has no vehicle parked.
    ///
    /// Holds the lot lock exclusively so parks into this lot wait until the deletion has
    /// either failed or committed; a park that runs afterwards finds no lot.
    ///
    /// # Returns
    /// - `Ok(())` - Lot and spots deleted, its sessions kept detached
    /// - `Err(ParkingError::LotInUse)` - At least one spot is occupied
    /// - `Err(ParkingError::LotNotFound)` - Unknown lot
    pub async fn delete(&self, lot_id: i32) -> Result<(), AppError> {
        let _lot_guard = self.locks.lots.exclusive(&lot_id).await;

        let txn = self.db.begin().await?;
        let repo = LotRepository::new(&txn);

        if repo.find_by_id(lot_id).await?.is_none() {
            return Err(ParkingError::LotNotFound(lot_id).into());
        }

        let occupied = SpotRegistry::new(&txn).count_occupied(lot_id).await?;
        if occupied > 0 {
            return Err(ParkingError::LotInUse(lot_id).into());
        }

        repo.delete(lot_id).await?;
        txn.commit().await?;

        tracing::info!("Deleted lot {}", lot_id);

        Ok(())
    }

    /// Lists every lot with its occupied spot count.
    pub async fn list_with_occupancy(&self) -> Result<Vec<LotOccupancy>, AppError> {
        let lots = LotRepository::new(self.db).list_all().await?;
        let registry = SpotRegistry::new(self.db);

        let mut result = Vec::with_capacity(lots.len());
        for lot in lots {
            let occupied = registry.count_occupied(lot.id).await?;
            result.push(LotOccupancy { lot, occupied });
        }

        Ok(result)
    }

    /// Lists lots that have at least one free spot.
    pub async fn list_available(&self) -> Result<Vec<AvailableLot>, AppError> {
        let lots = LotRepository::new(self.db).list_all().await?;
        let registry = SpotRegistry::new(self.db);

        let mut result = Vec::new();
        for lot in lots {
            let available = registry.count_free(lot.id).await?;
            if available > 0 {
                result.push(AvailableLot { lot, available });
            }
        }

        Ok(result)
    }

    /// Lists the spots of a lot with the vehicle, driver and entry time of each
    /// occupying session.
    ///
    /// # Returns
    /// - `Ok(Vec<SpotStatus>)` - Spots ordered by ID
    /// - `Err(ParkingError::LotNotFound)` - Unknown lot
    pub async fn spots(&self, lot_id: i32) -> Result<Vec<SpotStatus>, AppError> {
        if LotRepository::new(self.db)
            .find_by_id(lot_id)
            .await?
            .is_none()
        {
            return Err(ParkingError::LotNotFound(lot_id).into());
        }

        let spots = SpotRegistry::new(self.db).list_by_lot(lot_id).await?;
        let mut active: HashMap<i32, _> = SessionLedger::new(self.db)
            .active_by_lot(lot_id)
            .await?
            .into_iter()
            .filter_map(|(session, username)| {
                session.spot_id.map(|spot_id| (spot_id, (session, username)))
            })
            .collect();

        Ok(spots
            .into_iter()
            .map(|spot| {
                let occupant = spot
                    .occupied
                    .then(|| active.remove(&spot.id))
                    .flatten();

                match occupant {
                    Some((session, username)) => SpotStatus {
                        spot,
                        vehicle_number: Some(session.vehicle_number),
                        parked_by: username,
                        since: Some(session.entry_time),
                    },
                    None => SpotStatus {
                        spot,
                        vehicle_number: None,
                        parked_by: None,
                        since: None,
                    },
                }
            })
            .collect())
    }
}
