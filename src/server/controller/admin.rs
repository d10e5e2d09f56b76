use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::search::SearchQuery,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{admin::AdminService, search::SearchService},
        state::AppState,
    },
};

/// GET /api/admin/summary - Totals and per-lot bookings and revenue
///
/// # Authentication
/// Requires admin permission
///
/// # Returns
/// - `200 OK`: JSON AdminSummaryDto
/// - `403 Forbidden`: Logged in user is not an admin
pub async fn get_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let summary = AdminService::new(&state.db).summary().await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// GET /api/admin/users/{limit} - Drivers ranked by number of sessions
///
/// # Authentication
/// Requires admin permission
///
/// # Returns
/// - `200 OK`: JSON array of TopUserDto, at most `limit` entries
pub async fn get_top_users(
    State(state): State<AppState>,
    session: Session,
    Path(limit): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users: Vec<_> = AdminService::new(&state.db)
        .top_users(limit)
        .await?
        .into_iter()
        .map(|u| u.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(users)))
}

/// GET /api/admin/search?q= - Accounts, lots and spots matching the query
///
/// # Returns
/// - `200 OK`: JSON AdminSearchDto
/// - `400 Bad Request`: Missing or blank query
pub async fn search(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let results = SearchService::new(&state.db).admin(&query.q).await?;

    Ok((StatusCode::OK, Json(results.into_dto())))
}
