use super::*;

/// Tests stamping the last visit.
///
/// Expected: Ok with last_visit set
#[tokio::test]
async fn stamps_last_visit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.update_last_visit(user.id, Utc::now()).await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert!(stored.last_visit.is_some());

    Ok(())
}
