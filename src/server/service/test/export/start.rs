use super::*;

/// Tests starting an export and polling it to completion.
///
/// Expected: the job starts as STARTED and reaches SUCCESS with a readable file path
#[tokio::test]
async fn start_completes_in_background() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_export_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let dir = tempfile::tempdir()?;
    let (memory, notifier) = notifiers();
    let (user, _lot, _spots, _session) = factory::create_parked_user(db).await?;
    let service = ExportService::new(db, &notifier, dir.path());

    let job = service.start(user.id, Utc::now()).await?;
    assert_eq!(job.status, ExportStatus::Started);
    assert_eq!(job.clone().into_dto().file_path, None);

    let mut finished = None;
    for _ in 0..100 {
        let current = service.status(job.id, user.id).await?;
        if current.status != ExportStatus::Started {
            finished = Some(current);
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }

    let finished = finished.expect("export job did not finish");
    assert_eq!(finished.status, ExportStatus::Success);
    let file_path = finished.clone().into_dto().file_path.unwrap();
    assert!(std::path::Path::new(&file_path).exists());
    assert_eq!(memory.sent().len(), 1);

    Ok(())
}
