//! Parking session factory.
//!
//! Active sessions also mark their spot occupied so factory data always satisfies the
//! occupancy invariant.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
};

/// Factory for creating test sessions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let session = SessionFactory::new(&db, &user, &spot)
///     .entry_time(Utc::now() - Duration::hours(2))
///     .completed(Utc::now(), 20.0)
///     .build()
///     .await?;
/// ```
pub struct SessionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    lot_id: i32,
    spot_id: i32,
    spot_label: String,
    vehicle_number: String,
    entry_time: DateTime<Utc>,
    exit_time: Option<DateTime<Utc>>,
    amount_paid: f64,
}

impl<'a> SessionFactory<'a> {
    /// Creates a new SessionFactory for an active session entered one hour ago.
    pub fn new(
        db: &'a DatabaseConnection,
        user: &entity::user::Model,
        spot: &entity::parking_spot::Model,
    ) -> Self {
        Self {
            db,
            user_id: user.id,
            lot_id: spot.lot_id,
            spot_id: spot.id,
            spot_label: spot.label.clone(),
            vehicle_number: format!("TEST-{}", user.id),
            entry_time: Utc::now() - Duration::hours(1),
            exit_time: None,
            amount_paid: 0.0,
        }
    }

    pub fn vehicle_number(mut self, vehicle_number: impl Into<String>) -> Self {
        self.vehicle_number = vehicle_number.into();
        self
    }

    pub fn entry_time(mut self, entry_time: DateTime<Utc>) -> Self {
        self.entry_time = entry_time;
        self
    }

    /// Marks the session completed with the given exit time and fee.
    pub fn completed(mut self, exit_time: DateTime<Utc>, amount_paid: f64) -> Self {
        self.exit_time = Some(exit_time);
        self.amount_paid = amount_paid;
        self
    }

    /// Builds and inserts the session, occupying its spot when the session is active.
    ///
    /// The lot name is read from the spot's lot, as parking records it.
    pub async fn build(self) -> Result<entity::parking_session::Model, DbErr> {
        let active = self.exit_time.is_none();
        let status = if active { "ACTIVE" } else { "COMPLETED" };

        let lot = entity::prelude::ParkingLot::find_by_id(self.lot_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Lot {} not found",
                self.lot_id
            )))?;

        let session = entity::parking_session::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            lot_id: ActiveValue::Set(Some(self.lot_id)),
            spot_id: ActiveValue::Set(Some(self.spot_id)),
            lot_name: ActiveValue::Set(lot.name),
            spot_label: ActiveValue::Set(self.spot_label),
            vehicle_number: ActiveValue::Set(self.vehicle_number),
            entry_time: ActiveValue::Set(self.entry_time),
            exit_time: ActiveValue::Set(self.exit_time),
            amount_paid: ActiveValue::Set(self.amount_paid),
            status: ActiveValue::Set(status.to_string()),
        }
        .insert(self.db)
        .await?;

        if active {
            let spot = entity::prelude::ParkingSpot::find_by_id(self.spot_id)
                .one(self.db)
                .await?
                .ok_or(DbErr::RecordNotFound(format!(
                    "Spot {} not found",
                    self.spot_id
                )))?;

            let mut spot = spot.into_active_model();
            spot.occupied = ActiveValue::Set(true);
            spot.current_session_id = ActiveValue::Set(Some(session.id));
            spot.update(self.db).await?;
        }

        Ok(session)
    }
}

/// Creates an active session for the user on the given spot, entered one hour ago.
pub async fn create_active_session(
    db: &DatabaseConnection,
    user: &entity::user::Model,
    spot: &entity::parking_spot::Model,
) -> Result<entity::parking_session::Model, DbErr> {
    SessionFactory::new(db, user, spot).build().await
}

/// Creates a completed two hour session ending now with the given fee.
pub async fn create_completed_session(
    db: &DatabaseConnection,
    user: &entity::user::Model,
    spot: &entity::parking_spot::Model,
    amount_paid: f64,
) -> Result<entity::parking_session::Model, DbErr> {
    let now = Utc::now();
    SessionFactory::new(db, user, spot)
        .entry_time(now - Duration::hours(2))
        .completed(now, amount_paid)
        .build()
        .await
}
