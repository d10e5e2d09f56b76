use super::*;

/// Tests claiming a free spot.
///
/// Verifies that the conditional update occupies the spot and records the session.
///
/// Expected: Ok(Claimed) with the spot occupied by the session
#[tokio::test]
async fn claims_free_spot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_lot, spots) = factory::create_lot(db).await?;

    let registry = SpotRegistry::new(db);
    let outcome = registry.claim(spots[0].id, 42).await?;

    assert_eq!(outcome, ClaimOutcome::Claimed);
    let spot = registry.find_by_id(spots[0].id).await?.unwrap();
    assert!(spot.occupied);
    assert_eq!(spot.current_session_id, Some(42));

    Ok(())
}

/// Tests claiming a spot that is already occupied.
///
/// Verifies that the second claim does not overwrite the first session reference.
///
/// Expected: Ok(AlreadyTaken) and the original session kept
#[tokio::test]
async fn second_claim_is_already_taken() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_lot, spots) = factory::create_lot(db).await?;

    let registry = SpotRegistry::new(db);
    registry.claim(spots[0].id, 1).await?;
    let outcome = registry.claim(spots[0].id, 2).await?;

    assert_eq!(outcome, ClaimOutcome::AlreadyTaken);
    let spot = registry.find_by_id(spots[0].id).await?.unwrap();
    assert_eq!(spot.current_session_id, Some(1));

    Ok(())
}

/// Tests claiming a spot that does not exist.
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

    let result = SpotRegistry::new(db).claim(999, 1).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
