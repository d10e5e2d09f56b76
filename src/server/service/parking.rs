//! Spot allocation and session lifecycle.
//!
//! `ParkingService` implements park and unpark on top of the spot registry and the
//! session ledger. Each operation runs in one database transaction so a failure at any
//! step leaves no partial state. Keyed locks are always taken before the transaction
//! opens, user lock first, lot lock second.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::server::{
    data::{lot::LotRepository, session::SessionLedger, spot::SpotRegistry},
    error::{parking::ParkingError, AppError},
    model::{
        lot::Lot,
        session::{
            HistoryEntry, OpenSessionParams, ParkParams, ParkedSession, ParkingSession,
            UnparkedSession,
        },
        spot::{ClaimOutcome, ReleaseOutcome, Spot},
    },
    service::fare,
    util::lock::ParkingLocks,
};

pub struct ParkingService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a ParkingLocks,
}

impl<'a> ParkingService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a ParkingLocks) -> Self {
        Self { db, locks }
    }

    /// Parks the user's vehicle on the lowest free spot of a lot.
    ///
    /// Candidates are tried in ascending spot ID order. Each attempt inserts the session
    /// and claims the spot inside a savepoint; a lost claim race rolls the savepoint
    /// back and moves on to the next candidate.
    ///
    /// # Arguments
    /// - `params` - User, lot and vehicle of the request
    /// - `now` - Entry time recorded on the session
    ///
    /// # Returns
    /// - `Ok(ParkedSession)` - Session created and spot occupied
    /// - `Err(AppError::BadRequest)` - Empty vehicle number
    /// - `Err(ParkingError::LotNotFound)` - Unknown lot
    /// - `Err(ParkingError::AlreadyParked)` - The user has an active session
    /// - `Err(ParkingError::LotFull)` - No spot could be claimed
    /// - `Err(AppError::DbErr)` - Storage failure, nothing was written
    pub async fn park(
        &self,
        params: ParkParams,
        now: DateTime<Utc>,
    ) -> Result<ParkedSession, AppError> {
        let vehicle_number = params.vehicle_number.trim().to_string();
        if vehicle_number.is_empty() {
            return Err(AppError::BadRequest(
                "Vehicle number is required".to_string(),
            ));
        }

        let _user_guard = self.locks.users.exclusive(&params.user_id).await;
        let _lot_guard = self.locks.lots.shared(&params.lot_id).await;

        let txn = self.db.begin().await?;

        let lot = LotRepository::new(&txn)
            .find_by_id(params.lot_id)
            .await?
            .ok_or(ParkingError::LotNotFound(params.lot_id))?;

        if SessionLedger::new(&txn)
            .find_active_by_user(params.user_id)
            .await?
            .is_some()
        {
            return Err(ParkingError::AlreadyParked(params.user_id).into());
        }

        let candidates = SpotRegistry::new(&txn).list_free(lot.id).await?;
        let request = ParkParams {
            vehicle_number,
            ..params
        };

        let Some((session, spot)) = claim_first_free(&txn, &request, &lot, candidates, now).await?
        else {
            return Err(ParkingError::LotFull(lot.id).into());
        };

        txn.commit().await?;

        tracing::info!(
            "User {} parked {} on {} in lot {} (session {})",
            request.user_id,
            request.vehicle_number,
            spot.label,
            lot.id,
            session.id
        );

        Ok(ParkedSession {
            session_id: session.id,
            spot_id: spot.id,
            spot_label: spot.label,
            vehicle_number: request.vehicle_number,
            entry_time: now,
        })
    }

    /// Ends the user's active session, charges it and frees its spot.
    ///
    /// Completion and release commit together. A spot that turns out to be free
    /// already aborts the transaction with an internal error, since it means the
    /// occupancy invariant was broken elsewhere.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user leaving
    /// - `now` - Exit time recorded on the session
    ///
    /// # Returns
    /// - `Ok(UnparkedSession)` - Session completed, spot free
    /// - `Err(ParkingError::NoActiveSession)` - The user has nothing parked
    /// - `Err(AppError::InternalError)` - Session or spot state was inconsistent
    /// - `Err(AppError::DbErr)` - Storage failure, nothing was written
    pub async fn unpark(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<UnparkedSession, AppError> {
        let _user_guard = self.locks.users.exclusive(&user_id).await;

        let txn = self.db.begin().await?;
        let ledger = SessionLedger::new(&txn);
        let registry = SpotRegistry::new(&txn);

        let session = ledger
            .find_active_by_user(user_id)
            .await?
            .ok_or(ParkingError::NoActiveSession(user_id))?;

        let (Some(lot_id), Some(spot_id)) = (session.lot_id, session.spot_id) else {
            return Err(AppError::InternalError(format!(
                "Active session {} is detached from its lot",
                session.id
            )));
        };

        let spot = registry
            .find_by_id(spot_id)
            .await?
            .ok_or(ParkingError::SpotNotFound(spot_id))?;

        let lot = LotRepository::new(&txn)
            .find_by_id(lot_id)
            .await?
            .ok_or(ParkingError::LotNotFound(lot_id))?;

        let fare = fare::calculate(session.entry_time, now, lot.rate_per_hour);

        if !ledger.complete(session.id, now, fare.amount).await? {
            return Err(AppError::InternalError(format!(
                "Session {} was no longer active while unparking",
                session.id
            )));
        }

        if registry.release(spot.id).await? == ReleaseOutcome::NotOccupied {
            return Err(AppError::InternalError(format!(
                "Spot {} of active session {} was not occupied",
                spot.id, session.id
            )));
        }

        txn.commit().await?;

        tracing::info!(
            "User {} left {} in lot {} after {:.2}h, charged {:.2}",
            user_id,
            spot.label,
            lot.id,
            fare.duration_hours,
            fare.amount
        );

        Ok(UnparkedSession {
            session_id: session.id,
            duration_hours: fare::round2(fare.duration_hours),
            amount_paid: fare.amount,
            spot_label: spot.label,
        })
    }

    /// Counts the free spots of a lot.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of free spots at the time of the query
    /// - `Err(ParkingError::LotNotFound)` - Unknown lot
    pub async fn free_spots(&self, lot_id: i32) -> Result<u64, AppError> {
        if LotRepository::new(self.db)
            .find_by_id(lot_id)
            .await?
            .is_none()
        {
            return Err(ParkingError::LotNotFound(lot_id).into());
        }

        Ok(SpotRegistry::new(self.db).count_free(lot_id).await?)
    }

    /// Lists the user's sessions, newest first.
    pub async fn history(&self, user_id: i32) -> Result<Vec<HistoryEntry>, AppError> {
        Ok(SessionLedger::new(self.db).history_by_user(user_id).await?)
    }
}

/// Opens a session on the first candidate spot that can still be claimed.
///
/// Each attempt inserts the session and claims the spot inside a savepoint of `txn`.
/// A spot taken since `candidates` was listed rolls its savepoint back, leaving no
/// session row behind, and the next candidate is tried.
///
/// # Arguments
/// - `txn` - Open transaction of the park
/// - `request` - User and trimmed vehicle number
/// - `lot` - Lot the candidates belong to
/// - `candidates` - Spots to try, in order
/// - `now` - Entry time of the session
///
/// # Returns
/// - `Ok(Some((ParkingSession, Spot)))` - Session opened on the claimed spot
/// - `Ok(None)` - Every candidate was taken
/// - `Err(DbErr)` - Database error, the caller's transaction must be dropped
pub(crate) async fn claim_first_free(
    txn: &DatabaseTransaction,
    request: &ParkParams,
    lot: &Lot,
    candidates: Vec<Spot>,
    now: DateTime<Utc>,
) -> Result<Option<(ParkingSession, Spot)>, DbErr> {
    for spot in candidates {
        let savepoint = txn.begin().await?;

        let session = SessionLedger::new(&savepoint)
            .open(OpenSessionParams {
                user_id: request.user_id,
                lot_id: lot.id,
                spot_id: spot.id,
                lot_name: lot.name.clone(),
                spot_label: spot.label.clone(),
                vehicle_number: request.vehicle_number.clone(),
                entry_time: now,
            })
            .await?;

        match SpotRegistry::new(&savepoint)
            .claim(spot.id, session.id)
            .await?
        {
            ClaimOutcome::Claimed => {
                savepoint.commit().await?;
                return Ok(Some((session, spot)));
            }
            ClaimOutcome::AlreadyTaken => {
                savepoint.rollback().await?;
                tracing::debug!(
                    "Spot {} in lot {} was taken concurrently, trying next",
                    spot.label,
                    lot.id
                );
            }
        }
    }

    Ok(None)
}
