use crate::server::{
    error::{parking::ParkingError, AppError},
    model::session::{ParkParams, SessionStatus},
    service::parking::ParkingService,
    util::lock::ParkingLocks,
};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod claim;
mod scenario;

fn park_params(user_id: i32, lot_id: i32) -> ParkParams {
    ParkParams {
        user_id,
        lot_id,
        vehicle_number: format!("KA-{:04}", user_id),
    }
}

/// Counts ACTIVE sessions matching the filter column.
async fn active_sessions_where(
    db: &DatabaseConnection,
    column: entity::parking_session::Column,
    id: i32,
) -> Result<u64, sea_orm::DbErr> {
    entity::prelude::ParkingSession::find()
        .filter(column.eq(id))
        .filter(entity::parking_session::Column::Status.eq(SessionStatus::Active.as_str()))
        .count(db)
        .await
}
