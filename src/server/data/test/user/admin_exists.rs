use super::*;

/// Tests admin detection and driver counting.
///
/// Expected: false before an admin is created, true after; admins are not drivers
#[tokio::test]
async fn detects_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = UserRepository::new(db);

    factory::create_user(db).await?;
    assert!(!repo.admin_exists().await?);

    factory::create_admin(db).await?;
    assert!(repo.admin_exists().await?);
    assert_eq!(repo.count_drivers().await?, 1);
    assert_eq!(repo.list_drivers().await?.len(), 1);

    Ok(())
}
