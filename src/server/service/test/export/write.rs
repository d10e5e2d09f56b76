use super::*;

/// Tests exporting the history of a driver with two sessions.
///
/// Expected: a CSV named after the user and date with a header and two rows, mailed
/// to the user as an attachment
#[tokio::test]
async fn writes_csv_and_notifies() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_export_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir()?;
    let (memory, notifier) = notifiers();
    let (user, _lot, spots, _active) = factory::create_parked_user(db).await?;
    factory::create_completed_session(db, &user, &spots[1], 20.0).await?;
    let now = Utc::now();

    let path = ExportService::new(db, &notifier, dir.path())
        .export(user.id, now)
        .await?;

    let expected_name = format!(
        "parking_history_{}_{}.csv",
        user.username,
        now.format("%Y%m%d")
    );
    assert_eq!(path, dir.path().join(&expected_name));

    let contents = std::fs::read_to_string(&path)?;
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Session ID,Lot Name,Spot Number"));
    assert!(lines.iter().any(|l| l.ends_with(",20.00,COMPLETED")));
    assert!(lines.iter().any(|l| l.ends_with(",0.00,ACTIVE")));

    let outbox = memory.sent();
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0].to, user.email);
    let attachment = outbox[0].attachment.as_ref().unwrap();
    assert_eq!(attachment.filename, expected_name);
    assert_eq!(attachment.content_type, "text/csv");
    assert_eq!(attachment.data, contents.into_bytes());

    Ok(())
}

/// Tests exporting for a driver without history.
///
/// Expected: a CSV holding only the header row
#[tokio::test]
async fn empty_history_writes_header_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_export_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir()?;
    let (_memory, notifier) = notifiers();
    let user = factory::create_user(db).await?;

    let path = ExportService::new(db, &notifier, &dir.path().join("nested"))
        .export(user.id, Utc::now())
        .await?;

    let contents = std::fs::read_to_string(&path)?;
    assert_eq!(contents.lines().count(), 1);

    Ok(())
}

/// Tests running a job for a user that does not exist.
///
/// Expected: the job is recorded as FAILURE with no file path
#[tokio::test]
async fn run_records_failure() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_export_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir()?;
    let (memory, notifier) = notifiers();
    let user = factory::create_user(db).await?;
    let job = ExportJobRepository::new(db)
        .create(user.id, ExportStatus::Started, Utc::now())
        .await?;

    ExportService::new(db, &notifier, dir.path())
        .run(job.id, user.id + 1000)
        .await;

    let stored = ExportJobRepository::new(db)
        .find_for_user(job.id, user.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, ExportStatus::Failure);
    assert_eq!(stored.file_path, None);
    assert!(stored.completed_at.is_some());
    assert!(memory.sent().is_empty());

    Ok(())
}

/// Tests a job for a user whose name contains path separators.
///
/// Expected: SUCCESS with the file written directly inside the export directory
#[tokio::test]
async fn username_with_separators_stays_in_export_dir() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_export_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir()?;
    let (memory, notifier) = notifiers();
    let user = factory::user::UserFactory::new(db)
        .username("night/shift\\crew")
        .build()
        .await?;
    let job = ExportJobRepository::new(db)
        .create(user.id, ExportStatus::Started, Utc::now())
        .await?;

    ExportService::new(db, &notifier, dir.path())
        .run(job.id, user.id)
        .await;

    let stored = ExportJobRepository::new(db)
        .find_for_user(job.id, user.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, ExportStatus::Success);

    let path = std::path::PathBuf::from(stored.file_path.unwrap());
    assert_eq!(path.parent(), Some(dir.path()));
    assert!(path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with("parking_history_night_shift_crew_")));
    assert!(path.exists());
    assert_eq!(memory.sent().len(), 1);

    Ok(())
}
