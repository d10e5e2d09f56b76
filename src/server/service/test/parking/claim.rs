use super::*;
use crate::server::{
    data::{lot::LotRepository, spot::SpotRegistry},
    model::lot::Lot,
    service::parking::claim_first_free,
};
use sea_orm::TransactionTrait;
use test_utils::factory::parking_lot::LotFactory;

async fn load_lot(db: &DatabaseConnection, lot_id: i32) -> Result<Lot, AppError> {
    Ok(LotRepository::new(db)
        .find_by_id(lot_id)
        .await?
        .expect("lot was just created"))
}

/// Counts every session of a user, whatever its status.
async fn sessions_of(db: &DatabaseConnection, user_id: i32) -> Result<u64, sea_orm::DbErr> {
    entity::prelude::ParkingSession::find()
        .filter(entity::parking_session::Column::UserId.eq(user_id))
        .count(db)
        .await
}

/// Tests claiming from a candidate list that went stale.
///
/// Another driver takes SPOT-1 after the free spots were listed. The claim on SPOT-1
/// loses, its savepoint rolls back together with the session inserted for it, and the
/// next candidate is used.
///
/// Expected: SPOT-2 claimed and exactly one session row for the user
#[tokio::test]
async fn skips_spot_taken_after_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let (lot, spots) = LotFactory::new(db).capacity(2).build().await?;

    let candidates = SpotRegistry::new(db).list_free(lot.id).await?;
    assert_eq!(candidates.len(), 2);
    factory::create_active_session(db, &other, &spots[0]).await?;

    let lot = load_lot(db, lot.id).await?;
    let txn = db.begin().await?;
    let claimed = claim_first_free(
        &txn,
        &park_params(user.id, lot.id),
        &lot,
        candidates,
        Utc::now(),
    )
    .await?;
    txn.commit().await?;

    let (session, spot) = claimed.expect("second candidate is free");
    assert_eq!(spot.label, "SPOT-2");
    assert_eq!(session.spot_id, Some(spots[1].id));
    assert_eq!(session.spot_label, "SPOT-2");

    assert_eq!(sessions_of(db, user.id).await?, 1);
    assert_eq!(
        active_sessions_where(db, entity::parking_session::Column::UserId, user.id).await?,
        1
    );
    assert_eq!(
        active_sessions_where(db, entity::parking_session::Column::SpotId, spots[0].id).await?,
        1
    );

    let first = entity::prelude::ParkingSpot::find_by_id(spots[0].id)
        .one(db)
        .await?
        .unwrap();
    let second = entity::prelude::ParkingSpot::find_by_id(spots[1].id)
        .one(db)
        .await?
        .unwrap();
    assert_ne!(first.current_session_id, Some(session.id));
    assert_eq!(second.current_session_id, Some(session.id));

    Ok(())
}

/// Tests claiming when every listed candidate was taken in the meantime.
///
/// Expected: None and no session row left for the user
#[tokio::test]
async fn stale_candidates_leave_no_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let (lot, spots) = LotFactory::new(db).capacity(2).build().await?;

    let candidates = SpotRegistry::new(db).list_free(lot.id).await?;
    factory::create_active_session(db, &first, &spots[0]).await?;
    factory::create_active_session(db, &second, &spots[1]).await?;

    let lot = load_lot(db, lot.id).await?;
    let txn = db.begin().await?;
    let claimed = claim_first_free(
        &txn,
        &park_params(user.id, lot.id),
        &lot,
        candidates,
        Utc::now(),
    )
    .await?;
    txn.commit().await?;

    assert!(claimed.is_none());
    assert_eq!(sessions_of(db, user.id).await?, 0);
    assert_eq!(
        active_sessions_where(db, entity::parking_session::Column::LotId, lot.id).await?,
        2
    );

    Ok(())
}
