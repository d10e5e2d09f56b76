use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Domain errors of the allocation and session lifecycle.
///
/// Every variant is recoverable by the caller; none of them indicates a fault in the
/// service itself.
#[derive(Error, Debug, PartialEq)]
pub enum ParkingError {
    /// The user already holds an active session and must unpark first.
    #[error("User {0} already has a vehicle parked")]
    AlreadyParked(i32),

    /// Every spot of the lot is occupied.
    #[error("Parking lot {0} is full")]
    LotFull(i32),

    /// Unpark was requested without an active session.
    #[error("User {0} has no active parking session")]
    NoActiveSession(i32),

    /// The lot still has occupied spots and cannot be deleted.
    #[error("Parking lot {0} has vehicles parked")]
    LotInUse(i32),

    #[error("Parking lot {0} not found")]
    LotNotFound(i32),

    #[error("Parking spot {0} not found")]
    SpotNotFound(i32),

    #[error("Export job {0} not found")]
    ExportJobNotFound(i32),
}

/// Converts parking errors into HTTP responses.
///
/// # Returns
/// - 409 Conflict - `AlreadyParked`, `LotFull`, `LotInUse`
/// - 404 Not Found - `NoActiveSession` and the not-found variants
impl IntoResponse for ParkingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::AlreadyParked(_) | Self::LotFull(_) | Self::LotInUse(_) => StatusCode::CONFLICT,
            Self::NoActiveSession(_)
            | Self::LotNotFound(_)
            | Self::SpotNotFound(_)
            | Self::ExportJobNotFound(_) => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
