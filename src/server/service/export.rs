//! CSV export of a user's parking history.
//!
//! `start` records a STARTED job and spawns the export on the runtime; the request
//! returns immediately with the job ID. The spawned task writes the file, records the
//! outcome on the job and mails the CSV to the user.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::server::{
    data::{export_job::ExportJobRepository, session::SessionLedger, user::UserRepository},
    error::{parking::ParkingError, AppError},
    model::{
        export::{ExportJob, ExportStatus},
        session::HistoryEntry,
    },
    notifier::{Attachment, Notification, Notifier},
};

/// Column headers of the exported file.
pub const CSV_HEADER: [&str; 8] = [
    "Session ID",
    "Lot Name",
    "Spot Number",
    "Vehicle",
    "Entry Time",
    "Exit Time",
    "Fee",
    "Status",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct ExportService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a Arc<dyn Notifier>,
    export_dir: &'a Path,
}

impl<'a> ExportService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        notifier: &'a Arc<dyn Notifier>,
        export_dir: &'a Path,
    ) -> Self {
        Self {
            db,
            notifier,
            export_dir,
        }
    }

    /// Records a new export job and runs it in the background.
    ///
    /// # Returns
    /// - `Ok(ExportJob)` - The STARTED job
    /// - `Err(AppError::DbErr)` - The job could not be recorded
    pub async fn start(&self, user_id: i32, now: DateTime<Utc>) -> Result<ExportJob, AppError> {
        let job = ExportJobRepository::new(self.db)
            .create(user_id, ExportStatus::Started, now)
            .await?;

        let db = self.db.clone();
        let notifier = self.notifier.clone();
        let export_dir = self.export_dir.to_path_buf();
        let job_id = job.id;

        tokio::spawn(async move {
            ExportService::new(&db, &notifier, &export_dir)
                .run(job_id, user_id)
                .await;
        });

        tracing::info!("Started export job {} for user {}", job.id, user_id);

        Ok(job)
    }

    /// Executes an export job and records its outcome. Never fails; errors are logged
    /// and stored as FAILURE.
    pub async fn run(&self, job_id: i32, user_id: i32) {
        let repo = ExportJobRepository::new(self.db);

        match self.export(user_id, Utc::now()).await {
            Ok(path) => {
                let path = path.to_string_lossy().to_string();
                if let Err(e) = repo.mark_success(job_id, &path, Utc::now()).await {
                    tracing::error!("Failed to record export job {} success: {}", job_id, e);
                    return;
                }
                tracing::info!("Export job {} wrote {}", job_id, path);
            }
            Err(e) => {
                tracing::error!("Export job {} failed: {}", job_id, e);
                if let Err(e) = repo.mark_failure(job_id, Utc::now()).await {
                    tracing::error!("Failed to record export job {} failure: {}", job_id, e);
                }
            }
        }
    }

    /// Writes the user's history to `EXPORT_DIR` and sends it to them.
    ///
    /// # Returns
    /// - `Ok(PathBuf)` - Location of the written file
    /// - `Err(AppError::NotFound)` - The user no longer exists
    /// - `Err(AppError)` - Query, CSV or filesystem failure
    pub async fn export(&self, user_id: i32, now: DateTime<Utc>) -> Result<PathBuf, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        let history = SessionLedger::new(self.db).history_by_user(user_id).await?;
        let data = render_csv(&history)?;

        let filename = export_filename(&user.username, now);
        let path = self.export_dir.join(&filename);

        tokio::fs::create_dir_all(self.export_dir).await?;
        tokio::fs::write(&path, &data).await?;

        let notification = Notification::text(
            user.email.clone(),
            "Your Parking History CSV",
            "Download attached.",
        )
        .with_attachment(Attachment {
            filename,
            content_type: "text/csv".to_string(),
            data,
        });

        if let Err(e) = self.notifier.deliver(notification) {
            tracing::warn!("{}", e);
        }

        Ok(path)
    }

    /// Looks up a job owned by the user.
    ///
    /// # Returns
    /// - `Ok(ExportJob)` - The job
    /// - `Err(ParkingError::ExportJobNotFound)` - Unknown job or owned by someone else
    pub async fn status(&self, job_id: i32, user_id: i32) -> Result<ExportJob, AppError> {
        ExportJobRepository::new(self.db)
            .find_for_user(job_id, user_id)
            .await?
            .ok_or_else(|| ParkingError::ExportJobNotFound(job_id).into())
    }
}

/// Name of the export file for a user on a given day.
///
/// Characters outside ASCII letters, digits, `-` and `_` are replaced with `_` so the
/// username can never leave `EXPORT_DIR` or produce an invalid file name.
pub fn export_filename(username: &str, now: DateTime<Utc>) -> String {
    let safe: String = username
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!("parking_history_{}_{}.csv", safe, now.format("%Y%m%d"))
}

/// Renders history entries as CSV with a header row, in the given order.
pub fn render_csv(entries: &[HistoryEntry]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for entry in entries {
        let session = &entry.session;
        writer.write_record([
            session.id.to_string(),
            entry.lot_name.clone(),
            entry.spot_label.clone(),
            session.vehicle_number.clone(),
            session.entry_time.format(TIMESTAMP_FORMAT).to_string(),
            session
                .exit_time
                .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_default(),
            format!("{:.2}", session.amount_paid),
            session.status.to_string(),
        ])?;
    }

    writer.into_inner().map_err(|e| {
        let err = e.error();
        AppError::IoErr(std::io::Error::new(err.kind(), err.to_string()))
    })
}
