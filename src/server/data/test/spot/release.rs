use super::*;

/// Tests releasing an occupied spot.
///
/// Expected: Ok(Released) with the occupancy flag and session reference cleared
#[tokio::test]
async fn releases_occupied_spot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_user, _lot, spots, _session) = factory::create_parked_user(db).await?;

    let registry = SpotRegistry::new(db);
    let outcome = registry.release(spots[0].id).await?;

    assert_eq!(outcome, ReleaseOutcome::Released);
    let spot = registry.find_by_id(spots[0].id).await?.unwrap();
    assert!(!spot.occupied);
    assert_eq!(spot.current_session_id, None);

    Ok(())
}

/// Tests releasing a spot that is already free.
///
/// Expected: Ok(NotOccupied)
#[tokio::test]
async fn free_spot_is_not_occupied() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_lot, spots) = factory::create_lot(db).await?;

    let outcome = SpotRegistry::new(db).release(spots[1].id).await?;

    assert_eq!(outcome, ReleaseOutcome::NotOccupied);

    Ok(())
}

/// Tests releasing a spot that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn unknown_spot_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SpotRegistry::new(db).release(999).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
