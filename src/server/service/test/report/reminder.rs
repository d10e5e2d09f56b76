use super::*;

/// Tests the daily reminder run.
///
/// Drivers who entered a session within the last 24 hours are skipped; everyone else
/// is told how many lots opened today. Administrators never receive reminders.
///
/// Expected: reminders to the two idle drivers mentioning one new lot
#[tokio::test]
async fn reminds_idle_drivers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = MemoryNotifier::default();
    let now = at(2026, 5, 10, 18);

    let recent = factory::create_user(db).await?;
    let lapsed = factory::create_user(db).await?;
    let never = factory::create_user(db).await?;
    let _admin = factory::create_admin(db).await?;

    let (_old, spots) = LotFactory::new(db)
        .created_at(at(2026, 5, 1, 8))
        .build()
        .await?;
    LotFactory::new(db)
        .created_at(at(2026, 5, 10, 8))
        .build()
        .await?;

    SessionFactory::new(db, &recent, &spots[0])
        .entry_time(now - Duration::hours(3))
        .completed(now - Duration::hours(2), 10.0)
        .build()
        .await?;
    SessionFactory::new(db, &lapsed, &spots[1])
        .entry_time(now - Duration::days(3))
        .completed(now - Duration::days(3) + Duration::hours(1), 10.0)
        .build()
        .await?;

    let sent = ReportService::new(db)
        .send_daily_reminders(&notifier, now)
        .await?;
    let outbox = notifier.sent();
    let mut recipients: Vec<&str> = outbox.iter().map(|n| n.to.as_str()).collect();
    recipients.sort();
    let mut expected = vec![lapsed.email.as_str(), never.email.as_str()];
    expected.sort();

    assert_eq!(sent, 2);
    assert_eq!(recipients, expected);
    assert!(outbox.iter().all(|n| n.subject == "Need a Parking Spot?"));
    assert!(outbox.iter().all(|n| !n.html));
    assert!(outbox
        .iter()
        .all(|n| n.body.contains("1 new parking locations")));

    Ok(())
}

/// Tests reminders on a day without new lots.
///
/// Expected: the generic reminder text
#[tokio::test]
async fn generic_reminder_without_new_lots() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = MemoryNotifier::default();
    let now = at(2026, 5, 10, 18);
    let user = factory::create_user(db).await?;
    LotFactory::new(db)
        .created_at(at(2026, 5, 9, 23))
        .build()
        .await?;

    let sent = ReportService::new(db)
        .send_daily_reminders(&notifier, now)
        .await?;
    let outbox = notifier.sent();

    assert_eq!(sent, 1);
    assert!(outbox[0].body.starts_with(&format!("Hello {}", user.username)));
    assert!(outbox[0].body.contains("Book a spot today!"));

    Ok(())
}
