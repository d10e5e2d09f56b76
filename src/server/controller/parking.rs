use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{lot::FreeSpotsDto, parking::ParkDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::session::ParkParams,
        service::{lot::LotService, parking::ParkingService},
        state::AppState,
    },
};

/// POST /api/park - Park in the lowest numbered free spot of a lot
///
/// # Returns
/// - `201 Created`: JSON ParkedDto with the session and spot
/// - `400 Bad Request`: Vehicle number missing
/// - `404 Not Found`: Unknown lot
/// - `409 Conflict`: Already parked, or the lot is full
pub async fn park(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ParkDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let parked = ParkingService::new(&state.db, &state.locks)
        .park(ParkParams::from_dto(user.id, payload), Utc::now())
        .await?;

    Ok((StatusCode::CREATED, Json(parked.into_dto())))
}

/// POST /api/unpark - End the active session and pay
///
/// # Returns
/// - `200 OK`: JSON UnparkedDto with duration, fee and freed spot
/// - `404 Not Found`: Nothing parked
pub async fn unpark(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let unparked = ParkingService::new(&state.db, &state.locks)
        .unpark(user.id, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(unparked.into_dto())))
}

/// GET /api/lots - Lots with at least one free spot
pub async fn get_available_lots(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let lots: Vec<_> = LotService::new(&state.db, &state.locks)
        .list_available()
        .await?
        .into_iter()
        .map(|l| l.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(lots)))
}

/// GET /api/lots/{lot_id}/free - Free spot count of a lot
///
/// # Returns
/// - `200 OK`: JSON FreeSpotsDto
/// - `404 Not Found`: Unknown lot
pub async fn get_free_spots(
    State(state): State<AppState>,
    session: Session,
    Path(lot_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let free_spots = ParkingService::new(&state.db, &state.locks)
        .free_spots(lot_id)
        .await?;

    Ok((StatusCode::OK, Json(FreeSpotsDto { lot_id, free_spots })))
}
