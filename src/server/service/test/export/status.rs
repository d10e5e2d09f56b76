use super::*;

/// Tests looking up another user's export job.
///
/// Expected: Err(ExportJobNotFound) for the other user, Ok for the owner
#[tokio::test]
async fn status_is_scoped_to_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_export_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir()?;
    let (_memory, notifier) = notifiers();
    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let job = ExportJobRepository::new(db)
        .create(owner.id, ExportStatus::Pending, Utc::now())
        .await?;
    let service = ExportService::new(db, &notifier, dir.path());

    let foreign = service.status(job.id, other.id).await;
    let own = service.status(job.id, owner.id).await?;

    assert!(matches!(
        foreign,
        Err(AppError::ParkingErr(ParkingError::ExportJobNotFound(id))) if id == job.id
    ));
    assert_eq!(own.status, ExportStatus::Pending);

    Ok(())
}
