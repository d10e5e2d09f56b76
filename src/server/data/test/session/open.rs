use super::*;

/// Tests opening a session.
///
/// Expected: Ok with an ACTIVE session, no exit time and nothing paid
#[tokio::test]
async fn opens_active_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let (lot, spots) = factory::create_lot(db).await?;
    let now = Utc::now();

    let session = SessionLedger::new(db)
        .open(OpenSessionParams {
            user_id: user.id,
            lot_id: lot.id,
            spot_id: spots[0].id,
            lot_name: lot.name.clone(),
            spot_label: spots[0].label.clone(),
            vehicle_number: "KA-01-1234".to_string(),
            entry_time: now,
        })
        .await?;

    assert_eq!(session.status, SessionStatus::Active);
    assert_eq!(session.user_id, user.id);
    assert_eq!(session.lot_id, Some(lot.id));
    assert_eq!(session.spot_id, Some(spots[0].id));
    assert_eq!(session.lot_name, lot.name);
    assert_eq!(session.spot_label, "SPOT-1");
    assert_eq!(session.vehicle_number, "KA-01-1234");
    assert_eq!(session.exit_time, None);
    assert_eq!(session.amount_paid, 0.0);

    Ok(())
}
