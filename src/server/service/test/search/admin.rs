use super::*;

/// Tests the administrator search across accounts, lots and spots.
///
/// Expected: Ok with each kind matched on its own fields
#[tokio::test]
async fn finds_users_lots_and_spots() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = UserFactory::new(db)
        .username("eastgate_driver")
        .build()
        .await?;
    factory::create_user(db).await?;
    let (lot, _spots) = LotFactory::new(db)
        .name("Mall")
        .location(Some("Eastgate Avenue".to_string()))
        .build()
        .await?;
    LotFactory::new(db).name("Station").build().await?;

    let results = SearchService::new(db).admin("  EastGate ").await?;

    assert_eq!(results.term.as_str(), "eastgate");
    assert_eq!(results.users.len(), 1);
    assert_eq!(results.users[0].id, user.id);
    assert_eq!(results.lots.len(), 1);
    assert_eq!(results.lots[0].id, lot.id);
    assert!(results.spots.is_empty());

    let spots = SearchService::new(db).admin("spot-3").await?;
    assert_eq!(spots.spots.len(), 2);
    assert!(spots.users.is_empty());

    Ok(())
}

/// Tests the administrator search with a blank query.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_blank_query() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SearchService::new(db).admin("   ").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
