use super::*;

/// Tests listing free spots after one was taken.
///
/// Verifies that occupied spots are skipped and the remaining ones are ordered by ID,
/// and that the counts agree with the listing.
///
/// Expected: Ok with SPOT-2 and SPOT-3 in order, one occupied
#[tokio::test]
async fn skips_occupied_and_orders_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_user, lot, _spots, _session) = factory::create_parked_user(db).await?;

    let registry = SpotRegistry::new(db);
    let free = registry.list_free(lot.id).await?;

    let labels: Vec<&str> = free.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["SPOT-2", "SPOT-3"]);
    assert!(free.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(registry.count_free(lot.id).await?, 2);
    assert_eq!(registry.count_occupied(lot.id).await?, 1);
    assert_eq!(registry.count_all_occupied().await?, 1);

    Ok(())
}

/// Tests listing free spots of a lot that does not exist.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn unknown_lot_has_no_free_spots() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let free = SpotRegistry::new(db).list_free(999).await?;

    assert!(free.is_empty());

    Ok(())
}
