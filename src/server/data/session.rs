//! Session ledger for parking sessions.
//!
//! This module provides the `SessionLedger`, the record of every parking session. Rows
//! are inserted ACTIVE by the allocator and completed once by the fare calculator; the
//! ledger never deletes them. Reporting queries (history, monthly windows, analytics)
//! read from the same table. Deleting a lot only detaches its sessions; the lot name
//! and spot label copied onto each row keep history readable.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::{
    search::SearchTerm,
    session::{HistoryEntry, OpenSessionParams, ParkingSession, SessionStatus},
};

/// Repository providing operations on parking sessions.
pub struct SessionLedger<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SessionLedger<'a, C> {
    /// Creates a new SessionLedger over a connection or transaction.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new ACTIVE session.
    ///
    /// # Arguments
    /// - `params` - User, lot, spot with their display names, vehicle and entry time
    ///
    /// # Returns
    /// - `Ok(ParkingSession)` - The inserted session with its generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn open(&self, params: OpenSessionParams) -> Result<ParkingSession, DbErr> {
        let entity = entity::parking_session::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            lot_id: ActiveValue::Set(Some(params.lot_id)),
            spot_id: ActiveValue::Set(Some(params.spot_id)),
            lot_name: ActiveValue::Set(params.lot_name),
            spot_label: ActiveValue::Set(params.spot_label),
            vehicle_number: ActiveValue::Set(params.vehicle_number),
            entry_time: ActiveValue::Set(params.entry_time),
            exit_time: ActiveValue::Set(None),
            amount_paid: ActiveValue::Set(0.0),
            status: ActiveValue::Set(SessionStatus::Active.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        ParkingSession::from_entity(entity)
    }

    /// Finds a session by ID.
    pub async fn find_by_id(&self, session_id: i32) -> Result<Option<ParkingSession>, DbErr> {
        entity::prelude::ParkingSession::find_by_id(session_id)
            .one(self.db)
            .await?
            .map(ParkingSession::from_entity)
            .transpose()
    }

    /// Finds the user's ACTIVE session.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    ///
    /// # Returns
    /// - `Ok(Some(ParkingSession))` - The user currently has a vehicle parked
    /// - `Ok(None)` - The user has no active session
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_active_by_user(
        &self,
        user_id: i32,
    ) -> Result<Option<ParkingSession>, DbErr> {
        entity::prelude::ParkingSession::find()
            .filter(entity::parking_session::Column::UserId.eq(user_id))
            .filter(entity::parking_session::Column::Status.eq(SessionStatus::Active.as_str()))
            .one(self.db)
            .await?
            .map(ParkingSession::from_entity)
            .transpose()
    }

    /// Lists the ACTIVE sessions of a lot together with the parked user's username.
    pub async fn active_by_lot(
        &self,
        lot_id: i32,
    ) -> Result<Vec<(ParkingSession, Option<String>)>, DbErr> {
        let rows = entity::prelude::ParkingSession::find()
            .filter(entity::parking_session::Column::LotId.eq(lot_id))
            .filter(entity::parking_session::Column::Status.eq(SessionStatus::Active.as_str()))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(session, user)| {
                Ok((
                    ParkingSession::from_entity(session)?,
                    user.map(|u| u.username),
                ))
            })
            .collect()
    }

    /// Marks an ACTIVE session COMPLETED with its exit time and fee.
    ///
    /// The update is conditional on the session still being ACTIVE, so a session is
    /// completed at most once.
    ///
    /// # Arguments
    /// - `session_id` - ID of the session
    /// - `exit_time` - Time the vehicle left
    /// - `amount_paid` - Fee charged
    ///
    /// # Returns
    /// - `Ok(true)` - The session was ACTIVE and is now COMPLETED
    /// - `Ok(false)` - No ACTIVE session with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn complete(
        &self,
        session_id: i32,
        exit_time: DateTime<Utc>,
        amount_paid: f64,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::ParkingSession::update_many()
            .col_expr(
                entity::parking_session::Column::Status,
                Expr::value(SessionStatus::Completed.as_str()),
            )
            .col_expr(
                entity::parking_session::Column::ExitTime,
                Expr::value(Some(exit_time)),
            )
            .col_expr(
                entity::parking_session::Column::AmountPaid,
                Expr::value(amount_paid),
            )
            .filter(entity::parking_session::Column::Id.eq(session_id))
            .filter(entity::parking_session::Column::Status.eq(SessionStatus::Active.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Lists every session of a user, newest first, with lot name and spot label.
    pub async fn history_by_user(&self, user_id: i32) -> Result<Vec<HistoryEntry>, DbErr> {
        let sessions = entity::prelude::ParkingSession::find()
            .filter(entity::parking_session::Column::UserId.eq(user_id))
            .order_by_desc(entity::parking_session::Column::EntryTime)
            .order_by_desc(entity::parking_session::Column::Id)
            .all(self.db)
            .await?;

        self.with_names(sessions).await
    }

    /// Lists a user's sessions entered in `[start, end)`, oldest first.
    ///
    /// Used for monthly reports.
    pub async fn history_by_user_between(
        &self,
        user_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<HistoryEntry>, DbErr> {
        let sessions = entity::prelude::ParkingSession::find()
            .filter(entity::parking_session::Column::UserId.eq(user_id))
            .filter(entity::parking_session::Column::EntryTime.gte(start))
            .filter(entity::parking_session::Column::EntryTime.lt(end))
            .order_by_asc(entity::parking_session::Column::EntryTime)
            .all(self.db)
            .await?;

        self.with_names(sessions).await
    }

    /// Searches a user's sessions, newest first.
    ///
    /// A session matches when its vehicle number or recorded lot name contains the
    /// term, or when it belongs to one of `lot_ids` (lots whose current name matched).
    ///
    /// # Arguments
    /// - `user_id` - Owner of the sessions
    /// - `term` - Normalized search term
    /// - `lot_ids` - Lots matched by their current name
    pub async fn search_by_user(
        &self,
        user_id: i32,
        term: &SearchTerm,
        lot_ids: Vec<i32>,
    ) -> Result<Vec<HistoryEntry>, DbErr> {
        let sessions = entity::prelude::ParkingSession::find()
            .filter(entity::parking_session::Column::UserId.eq(user_id))
            .filter(
                Condition::any()
                    .add(entity::parking_session::Column::VehicleNumber.contains(term.as_str()))
                    .add(entity::parking_session::Column::LotName.contains(term.as_str()))
                    .add(entity::parking_session::Column::LotId.is_in(lot_ids)),
            )
            .order_by_desc(entity::parking_session::Column::EntryTime)
            .order_by_desc(entity::parking_session::Column::Id)
            .all(self.db)
            .await?;

        self.with_names(sessions).await
    }

    /// Counts sessions of any status per user.
    ///
    /// Users without sessions are absent from the map.
    pub async fn count_by_user(&self) -> Result<HashMap<i32, u64>, DbErr> {
        let user_ids: Vec<i32> = entity::prelude::ParkingSession::find()
            .select_only()
            .column(entity::parking_session::Column::UserId)
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        let mut counts = HashMap::new();
        for user_id in user_ids {
            *counts.entry(user_id).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Lists the IDs of users who entered a session at or after `since`.
    pub async fn user_ids_entered_since(&self, since: DateTime<Utc>) -> Result<Vec<i32>, DbErr> {
        let mut ids: Vec<i32> = entity::prelude::ParkingSession::find()
            .filter(entity::parking_session::Column::EntryTime.gte(since))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| s.user_id)
            .collect();

        ids.sort_unstable();
        ids.dedup();
        Ok(ids)
    }

    /// Lists every session in the ledger.
    pub async fn all(&self) -> Result<Vec<ParkingSession>, DbErr> {
        entity::prelude::ParkingSession::find()
            .order_by_asc(entity::parking_session::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(ParkingSession::from_entity)
            .collect()
    }

    /// Resolves the current lot name of each session, keeping input order.
    ///
    /// Sessions whose lot was deleted keep the name recorded at park time. Spot labels
    /// never change, so the recorded label is used as is.
    async fn with_names(
        &self,
        sessions: Vec<entity::parking_session::Model>,
    ) -> Result<Vec<HistoryEntry>, DbErr> {
        if sessions.is_empty() {
            return Ok(Vec::new());
        }

        let lot_ids: Vec<i32> = sessions.iter().filter_map(|s| s.lot_id).collect();

        let lot_names: HashMap<i32, String> = entity::prelude::ParkingLot::find()
            .filter(entity::parking_lot::Column::Id.is_in(lot_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|lot| (lot.id, lot.name))
            .collect();

        sessions
            .into_iter()
            .map(|s| {
                let session = ParkingSession::from_entity(s)?;
                let lot_name = session
                    .lot_id
                    .and_then(|id| lot_names.get(&id).cloned())
                    .unwrap_or_else(|| session.lot_name.clone());
                let spot_label = session.spot_label.clone();

                Ok(HistoryEntry {
                    session,
                    lot_name,
                    spot_label,
                })
            })
            .collect()
    }
}
