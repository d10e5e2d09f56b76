use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::server::{
    controller::{admin, auth, export, lot, parking, user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/lots", get(parking::get_available_lots))
        .route("/api/lots/{lot_id}/free", get(parking::get_free_spots))
        .route("/api/park", post(parking::park))
        .route("/api/unpark", post(parking::unpark))
        .route("/api/history", get(user::get_history))
        .route("/api/summary", get(user::get_summary))
        .route("/api/search", get(user::search))
        .route("/api/export", post(export::start_export))
        .route("/api/export/{job_id}", get(export::get_export))
        .route("/api/admin/lots", get(lot::get_lots).post(lot::create_lot))
        .route(
            "/api/admin/lots/{lot_id}",
            put(lot::update_lot).delete(lot::delete_lot),
        )
        .route("/api/admin/lots/{lot_id}/spots", get(lot::get_spots))
        .route("/api/admin/summary", get(admin::get_summary))
        .route("/api/admin/users/{limit}", get(admin::get_top_users))
        .route("/api/admin/search", get(admin::search))
        .layer(TraceLayer::new_for_http())
}
