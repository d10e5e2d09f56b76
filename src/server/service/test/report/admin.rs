use super::*;

/// Tests the admin dashboard totals.
///
/// Expected: drivers counted without admins, every lot listed with bookings and revenue,
/// occupancy counting active sessions
#[tokio::test]
async fn totals_users_lots_and_revenue() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let _admin = factory::create_admin(db).await?;
    let driver = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let (central, central_spots) = LotFactory::new(db)
        .name("Central")
        .capacity(2)
        .build()
        .await?;
    let (quiet, _spots) = LotFactory::new(db)
        .name("Quiet")
        .capacity(4)
        .build()
        .await?;

    factory::create_completed_session(db, &driver, &central_spots[0], 12.5).await?;
    factory::create_completed_session(db, &other, &central_spots[1], 7.25).await?;
    factory::create_active_session(db, &driver, &central_spots[0]).await?;

    let summary = AdminService::new(db).summary().await?;

    assert_eq!(summary.total_users, 2);
    assert_eq!(summary.total_lots, 2);
    assert_eq!(summary.total_capacity, 6);
    assert_eq!(summary.current_occupancy, 1);

    let central_stats = summary
        .lot_analytics
        .iter()
        .find(|l| l.name == central.name)
        .unwrap();
    let quiet_stats = summary
        .lot_analytics
        .iter()
        .find(|l| l.name == quiet.name)
        .unwrap();
    assert_eq!(central_stats.bookings, 3);
    assert_eq!(central_stats.revenue, 19.75);
    assert_eq!(quiet_stats.bookings, 0);
    assert_eq!(quiet_stats.revenue, 0.0);

    Ok(())
}

/// Tests ranking drivers by session count.
///
/// Expected: drivers ordered by count then ID, zero-count drivers included, admins
/// excluded, the list cut at the limit
#[tokio::test]
async fn ranks_top_users_by_sessions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let idle = factory::create_user(db).await?;
    let regular = factory::create_user(db).await?;
    let occasional = factory::create_user(db).await?;
    let (_lot, spots) = LotFactory::new(db).capacity(5).build().await?;

    factory::create_completed_session(db, &admin, &spots[0], 5.0).await?;
    factory::create_completed_session(db, &regular, &spots[0], 5.0).await?;
    factory::create_completed_session(db, &regular, &spots[1], 5.0).await?;
    factory::create_active_session(db, &regular, &spots[2]).await?;
    factory::create_completed_session(db, &occasional, &spots[3], 5.0).await?;

    let service = AdminService::new(db);
    let all = service.top_users(10).await?;
    let top = service.top_users(2).await?;

    let ranked: Vec<(i32, u64)> = all.iter().map(|u| (u.id, u.session_count)).collect();
    assert_eq!(
        ranked,
        vec![(regular.id, 3), (occasional.id, 1), (idle.id, 0)]
    );
    assert_eq!(all[0].username, regular.username);
    assert_eq!(top.len(), 2);
    assert_eq!(top[1].id, occasional.id);

    Ok(())
}
