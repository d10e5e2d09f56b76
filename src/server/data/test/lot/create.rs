use super::*;

/// Tests creating a lot.
///
/// Expected: Ok with the lot stored as given
#[tokio::test]
async fn creates_lot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LotRepository::new(db);
    let lot = repo
        .create(
            CreateLotParams {
                name: "Central".to_string(),
                location: Some("Main Street".to_string()),
                capacity: 5,
                rate_per_hour: 12.5,
            },
            Utc::now(),
        )
        .await?;

    let stored = repo.find_by_id(lot.id).await?.unwrap();
    assert_eq!(stored.name, "Central");
    assert_eq!(stored.location.as_deref(), Some("Main Street"));
    assert_eq!(stored.capacity, 5);
    assert_eq!(stored.rate_per_hour, 12.5);

    Ok(())
}

/// Tests counting lots created since a cutoff.
///
/// Expected: Ok(1) when one of two lots is newer than the cutoff
#[tokio::test]
async fn counts_lots_created_since() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    factory::parking_lot::LotFactory::new(db)
        .created_at(now - Duration::days(3))
        .build()
        .await?;
    factory::create_lot(db).await?;

    let count = LotRepository::new(db)
        .count_created_since(now - Duration::hours(1))
        .await?;

    assert_eq!(count, 1);

    Ok(())
}
