use chrono::Utc;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, notifier::Notifier, service::report::ReportService};

/// Every day at 18:00 UTC.
const DAILY_REMINDER_SCHEDULE: &str = "0 0 18 * * *";
/// The first of every month at 00:30 UTC.
const MONTHLY_REPORT_SCHEDULE: &str = "0 30 0 1 * *";

/// Starts the reminder and monthly report scheduler
///
/// Both jobs only read the session ledger. A failing run is logged and the next run
/// happens on schedule.
///
/// # Arguments
/// - `db`: Database connection
/// - `notifier`: Sink the reminders and reports are delivered to
pub async fn start_scheduler(
    db: DatabaseConnection,
    notifier: Arc<dyn Notifier>,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job_notifier = notifier.clone();
    let reminders = Job::new_async(DAILY_REMINDER_SCHEDULE, move |_uuid, _lock| {
        let db = job_db.clone();
        let notifier = job_notifier.clone();

        Box::pin(async move {
            if let Err(e) = ReportService::new(&db)
                .send_daily_reminders(notifier.as_ref(), Utc::now())
                .await
            {
                tracing::error!("Error sending daily reminders: {}", e);
            }
        })
    })?;

    let job_db = db;
    let job_notifier = notifier;
    let reports = Job::new_async(MONTHLY_REPORT_SCHEDULE, move |_uuid, _lock| {
        let db = job_db.clone();
        let notifier = job_notifier.clone();

        Box::pin(async move {
            if let Err(e) = ReportService::new(&db)
                .send_monthly_reports(notifier.as_ref(), Utc::now())
                .await
            {
                tracing::error!("Error sending monthly reports: {}", e);
            }
        })
    })?;

    scheduler.add(reminders).await?;
    scheduler.add(reports).await?;
    scheduler.start().await?;

    tracing::info!("Report scheduler started");

    Ok(scheduler)
}
