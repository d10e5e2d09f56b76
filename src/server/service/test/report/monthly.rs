use super::*;

/// Tests the monthly report run on the first of the month.
///
/// Only sessions entered during the previous calendar month are reported, and drivers
/// without any receive nothing.
///
/// Expected: one HTML report to the active driver with totals of the previous month
#[tokio::test]
async fn reports_previous_month_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = MemoryNotifier::default();
    let driver = factory::create_user(db).await?;
    let _idle = factory::create_user(db).await?;
    let _admin = factory::create_admin(db).await?;
    let (lot, spots) = LotFactory::new(db).name("Central").build().await?;

    for (day, amount) in [(3, 10.0), (17, 12.5)] {
        SessionFactory::new(db, &driver, &spots[0])
            .entry_time(at(2026, 2, day, 9))
            .completed(at(2026, 2, day, 10), amount)
            .build()
            .await?;
    }
    SessionFactory::new(db, &driver, &spots[1])
        .entry_time(at(2026, 1, 30, 9))
        .completed(at(2026, 1, 30, 10), 99.0)
        .build()
        .await?;
    SessionFactory::new(db, &driver, &spots[1])
        .entry_time(at(2026, 3, 1, 0))
        .completed(at(2026, 3, 1, 0), 99.0)
        .build()
        .await?;

    let now = Utc.with_ymd_and_hms(2026, 3, 1, 0, 30, 0).unwrap();
    let service = ReportService::new(db);

    let report = service.monthly_report(driver.id, now).await?.unwrap();
    assert_eq!(report.total_parkings(), 2);
    assert_eq!(report.total_spent(), 22.5);
    assert_eq!(report.favorite_lot(), Some(lot.name.as_str()));

    let sent = service.send_monthly_reports(&notifier, now).await?;
    let outbox = notifier.sent();

    assert_eq!(sent, 1);
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0].to, driver.email);
    assert_eq!(outbox[0].subject, "Monthly Parking Report: February 2026");
    assert!(outbox[0].html);
    assert!(outbox[0].body.contains("$22.50"));

    Ok(())
}

/// Tests the monthly report of a driver without sessions in the month.
///
/// Expected: Ok(None)
#[tokio::test]
async fn nothing_to_report() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let driver = factory::create_user(db).await?;

    let report = ReportService::new(db)
        .monthly_report(driver.id, at(2026, 3, 1, 1))
        .await?;

    assert!(report.is_none());

    Ok(())
}
