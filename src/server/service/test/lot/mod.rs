use crate::server::{
    error::{parking::ParkingError, AppError},
    model::lot::{CreateLotParams, UpdateLotParams},
    service::{lot::LotService, parking::ParkingService},
    util::lock::ParkingLocks,
};
use chrono::Utc;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};


fn lot_params(name: &str, capacity: i32) -> CreateLotParams {
    CreateLotParams {
        name: name.to_string(),
        location: Some("Main Street".to_string()),
        capacity,
        rate_per_hour: 10.0,
    }
}
