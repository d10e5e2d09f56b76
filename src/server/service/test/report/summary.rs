use super::*;

/// Tests the usage summary of a driver across two lots and two months.
///
/// Expected: sessions counted per lot including the active one, spend per month and per
/// lot counting completed sessions only
#[tokio::test]
async fn groups_usage_and_spend() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let (central, central_spots) = LotFactory::new(db).name("Central").build().await?;
    let (harbor, harbor_spots) = LotFactory::new(db).name("Harbor").build().await?;

    SessionFactory::new(db, &user, &central_spots[0])
        .entry_time(at(2026, 4, 3, 9))
        .completed(at(2026, 4, 3, 11), 20.0)
        .build()
        .await?;
    SessionFactory::new(db, &user, &central_spots[1])
        .entry_time(at(2026, 5, 7, 9))
        .completed(at(2026, 5, 7, 10), 10.0)
        .build()
        .await?;
    SessionFactory::new(db, &user, &harbor_spots[0])
        .entry_time(at(2026, 5, 20, 9))
        .completed(at(2026, 5, 20, 12), 30.5)
        .build()
        .await?;
    SessionFactory::new(db, &user, &central_spots[2])
        .entry_time(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let summary = ReportService::new(db).user_summary(user.id).await?;

    assert_eq!(
        summary.usage_by_lot,
        vec![(central.name.clone(), 3), (harbor.name.clone(), 1)]
    );
    assert_eq!(
        summary.monthly_spend,
        vec![("2026-04".to_string(), 20.0), ("2026-05".to_string(), 40.5)]
    );
    assert_eq!(
        summary.spend_by_lot,
        vec![(harbor.name, 30.5), (central.name, 30.0)]
    );

    Ok(())
}

/// Tests the summary of a driver who never parked.
///
/// Expected: an empty summary
#[tokio::test]
async fn empty_for_new_driver() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let summary = ReportService::new(db).user_summary(user.id).await?;

    assert!(summary.usage_by_lot.is_empty());
    assert!(summary.monthly_spend.is_empty());
    assert!(summary.spend_by_lot.is_empty());

    Ok(())
}
