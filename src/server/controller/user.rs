use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::search::SearchQuery,
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::{parking::ParkingService, report::ReportService, search::SearchService},
        state::AppState,
    },
};

/// GET /api/history - Sessions of the current user, newest first
///
/// # Authentication
/// Requires user to be logged in (no admin permission required)
///
/// # Returns
/// - `200 OK`: JSON array of HistoryEntryDto
pub async fn get_history(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let history: Vec<_> = ParkingService::new(&state.db, &state.locks)
        .history(user.id)
        .await?
        .into_iter()
        .map(|entry| entry.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(history)))
}

/// GET /api/summary - Usage and spend of the current user
///
/// # Returns
/// - `200 OK`: JSON UserSummaryDto with usage per lot, spend per month and per lot
pub async fn get_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let summary = ReportService::new(&state.db).user_summary(user.id).await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// GET /api/search?q= - Lots and own sessions matching the query
///
/// # Returns
/// - `200 OK`: JSON DriverSearchDto, empty lists for a blank query
pub async fn search(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let results = SearchService::new(&state.db)
        .driver(user.id, &query.q)
        .await?;

    Ok((StatusCode::OK, Json(results.into_dto())))
}
