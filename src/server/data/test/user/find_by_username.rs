use super::*;

/// Tests finding a user by username.
///
/// Expected: Ok(Some) for a known username, Ok(None) otherwise
#[tokio::test]
async fn finds_by_exact_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::UserFactory::new(db)
        .username("carol")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.find_by_username("carol").await?.map(|u| u.id), Some(user.id));
    assert!(repo.find_by_username("dave").await?.is_none());

    Ok(())
}
