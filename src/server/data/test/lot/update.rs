use super::*;

/// Tests a partial update.
///
/// Verifies that only provided fields change and capacity stays as created.
///
/// Expected: Ok(Some) with the new rate and the old name
#[tokio::test]
async fn updates_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (lot, _spots) = factory::create_lot(db).await?;

    let updated = LotRepository::new(db)
        .update(
            lot.id,
            UpdateLotParams {
                rate_per_hour: Some(25.0),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.rate_per_hour, 25.0);
    assert_eq!(updated.name, lot.name);
    assert_eq!(updated.capacity, lot.capacity);

    Ok(())
}

/// Tests updating a lot that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_lot_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = LotRepository::new(db)
        .update(999, UpdateLotParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
