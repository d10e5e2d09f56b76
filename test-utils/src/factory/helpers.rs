//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values across all factories in a test binary.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user parked in a fresh lot.
///
/// This is a convenience method that creates:
/// 1. User
/// 2. Parking lot with default capacity and its spots
/// 3. Active session occupying the first spot
///
/// # Returns
/// - `Ok((user, lot, spots, session))` - Created entities; `spots[0]` is occupied
/// - `Err(DbErr)` - Database error during creation
pub async fn create_parked_user(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::parking_lot::Model,
        Vec<entity::parking_spot::Model>,
        entity::parking_session::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let (lot, mut spots) = crate::factory::parking_lot::create_lot(db).await?;
    let session =
        crate::factory::parking_session::create_active_session(db, &user, &spots[0]).await?;

    spots[0].occupied = true;
    spots[0].current_session_id = Some(session.id);

    Ok((user, lot, spots, session))
}
