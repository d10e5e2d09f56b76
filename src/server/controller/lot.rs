use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::MessageDto,
        lot::{CreateLotDto, UpdateLotDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::lot::{CreateLotParams, LotOccupancy, UpdateLotParams},
        service::lot::LotService,
        state::AppState,
    },
};

/// GET /api/admin/lots - Every lot with occupied and available counts
///
/// # Authentication
/// Requires admin permission
pub async fn get_lots(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let lots: Vec<_> = LotService::new(&state.db, &state.locks)
        .list_with_occupancy()
        .await?
        .into_iter()
        .map(|l| l.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(lots)))
}

/// POST /api/admin/lots - Create a lot and its spots
///
/// # Returns
/// - `201 Created`: JSON LotDto with every spot free
/// - `400 Bad Request`: Empty name, non-positive capacity or negative rate
pub async fn create_lot(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateLotDto>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let lot = LotService::new(&state.db, &state.locks)
        .create(CreateLotParams::from_dto(payload), Utc::now())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(LotOccupancy { lot, occupied: 0 }.into_dto()),
    ))
}

/// PUT /api/admin/lots/{lot_id} - Update name, location or rate
///
/// # Returns
/// - `200 OK`: JSON LotDto with current occupancy
/// - `400 Bad Request`: Empty name or negative rate
/// - `404 Not Found`: Unknown lot
pub async fn update_lot(
    State(state): State<AppState>,
    session: Session,
    Path(lot_id): Path<i32>,
    Json(payload): Json<UpdateLotDto>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = LotService::new(&state.db, &state.locks);
    let lot = service
        .update(lot_id, UpdateLotParams::from_dto(payload))
        .await?;
    let occupied = service
        .spots(lot_id)
        .await?
        .iter()
        .filter(|s| s.spot.occupied)
        .count() as u64;

    Ok((StatusCode::OK, Json(LotOccupancy { lot, occupied }.into_dto())))
}

/// DELETE /api/admin/lots/{lot_id} - Delete an empty lot with its spots
///
/// # Returns
/// - `200 OK`: Lot deleted
/// - `404 Not Found`: Unknown lot
/// - `409 Conflict`: A vehicle is still parked in the lot
pub async fn delete_lot(
    State(state): State<AppState>,
    session: Session,
    Path(lot_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    LotService::new(&state.db, &state.locks)
        .delete(lot_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Lot {} deleted", lot_id),
        }),
    ))
}

/// GET /api/admin/lots/{lot_id}/spots - Spots with the occupying vehicle and driver
pub async fn get_spots(
    State(state): State<AppState>,
    session: Session,
    Path(lot_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let spots: Vec<_> = LotService::new(&state.db, &state.locks)
        .spots(lot_id)
        .await?
        .into_iter()
        .map(|s| s.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(spots)))
}
