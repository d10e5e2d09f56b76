use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::server::{
    error::AppError, middleware::auth::AuthGuard, service::export::ExportService,
    state::AppState,
};

/// POST /api/export - Start exporting the current user's history as CSV
///
/// The export runs in the background; poll `GET /api/export/{job_id}` for its outcome.
///
/// # Returns
/// - `202 Accepted`: JSON ExportJobDto in STARTED state
pub async fn start_export(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let job = ExportService::new(&state.db, &state.notifier, &state.export_dir)
        .start(user.id, Utc::now())
        .await?;

    Ok((StatusCode::ACCEPTED, Json(job.into_dto())))
}

/// GET /api/export/{job_id} - Status of one of the current user's export jobs
///
/// # Returns
/// - `200 OK`: JSON ExportJobDto, with `file_path` once the job succeeded
/// - `404 Not Found`: Unknown job or owned by another user
pub async fn get_export(
    State(state): State<AppState>,
    session: Session,
    Path(job_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let job = ExportService::new(&state.db, &state.notifier, &state.export_dir)
        .status(job_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(job.into_dto())))
}
