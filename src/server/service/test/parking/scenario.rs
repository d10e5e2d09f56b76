use super::*;

/// Tests a full day in a two spot lot.
///
/// A and B fill the lot, C is turned away, A leaves after 1.5 hours paying 15.0 and C
/// then gets the spot A freed.
///
/// Expected: every step behaves as described and at most two sessions are ever ACTIVE
#[tokio::test]
async fn two_spot_lot_lifecycle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ParkingLocks::new();
    let (lot, _spots) = factory::parking_lot::LotFactory::new(db)
        .capacity(2)
        .rate_per_hour(10.0)
        .build()
        .await?;
    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    let c = factory::create_user(db).await?;
    let start = Utc::now() - Duration::hours(3);

    let service = ParkingService::new(db, &locks);

    let parked_a = service.park(park_params(a.id, lot.id), start).await?;
    let parked_b = service.park(park_params(b.id, lot.id), start).await?;
    assert_eq!(parked_a.spot_label, "SPOT-1");
    assert_eq!(parked_b.spot_label, "SPOT-2");

    let rejected = service.park(park_params(c.id, lot.id), start).await;
    assert!(matches!(
        rejected,
        Err(AppError::ParkingErr(ParkingError::LotFull(_)))
    ));

    let unparked = service
        .unpark(a.id, start + Duration::minutes(90))
        .await?;
    assert_eq!(unparked.amount_paid, 15.0);
    assert_eq!(unparked.spot_label, "SPOT-1");
    assert_eq!(service.free_spots(lot.id).await?, 1);

    let parked_c = service
        .park(park_params(c.id, lot.id), start + Duration::minutes(95))
        .await?;
    assert_eq!(parked_c.spot_label, "SPOT-1");

    let active = active_sessions_where(db, entity::parking_session::Column::LotId, lot.id).await?;
    assert_eq!(active, 2);

    Ok(())
}
