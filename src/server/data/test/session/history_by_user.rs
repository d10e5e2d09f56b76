use super::*;
use test_utils::factory::parking_session::SessionFactory;

/// Tests listing a user's history.
///
/// Verifies newest-first ordering, that lot names and spot labels are joined in, and
/// that other users' sessions are excluded.
///
/// Expected: Ok with the user's two sessions, newest first
#[tokio::test]
async fn lists_newest_first_with_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let (lot, spots) = factory::create_lot(db).await?;
    let now = Utc::now();

    let old = SessionFactory::new(db, &user, &spots[1])
        .entry_time(now - Duration::days(3))
        .completed(now - Duration::days(3) + Duration::hours(2), 20.0)
        .build()
        .await?;
    let recent = SessionFactory::new(db, &user, &spots[0])
        .entry_time(now - Duration::hours(1))
        .build()
        .await?;
    factory::create_completed_session(db, &other, &spots[2], 10.0).await?;

    let history = SessionLedger::new(db).history_by_user(user.id).await?;

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].session.id, recent.id);
    assert_eq!(history[0].spot_label, "SPOT-1");
    assert_eq!(history[1].session.id, old.id);
    assert_eq!(history[1].spot_label, "SPOT-2");
    assert!(history.iter().all(|h| h.lot_name == lot.name));

    Ok(())
}

/// Tests the monthly window query.
///
/// Expected: Ok with only the session entered inside `[start, end)`
#[tokio::test]
async fn window_excludes_outside_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let (_lot, spots) = factory::create_lot(db).await?;
    let now = Utc::now();

    let inside = SessionFactory::new(db, &user, &spots[0])
        .entry_time(now - Duration::days(10))
        .completed(now - Duration::days(10) + Duration::hours(1), 10.0)
        .build()
        .await?;
    SessionFactory::new(db, &user, &spots[1])
        .entry_time(now - Duration::days(40))
        .completed(now - Duration::days(40) + Duration::hours(1), 10.0)
        .build()
        .await?;

    let entries = SessionLedger::new(db)
        .history_by_user_between(user.id, now - Duration::days(30), now)
        .await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].session.id, inside.id);

    let recent_users = SessionLedger::new(db)
        .user_ids_entered_since(now - Duration::days(30))
        .await?;
    assert_eq!(recent_users, vec![user.id]);

    Ok(())
}
