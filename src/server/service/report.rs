//! Usage summaries, daily reminders and monthly reports.
//!
//! Everything here only reads the ledger. Notification delivery is best effort: a
//! failed delivery is logged and the run continues with the next user.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc};
use sea_orm::DatabaseConnection;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::server::{
    data::{lot::LotRepository, session::SessionLedger, user::UserRepository},
    error::AppError,
    model::{
        report::{MonthlyReport, Reminder},
        summary::UserSummary,
        user::User,
    },
    notifier::{Notification, Notifier},
    service::fare::round2,
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Summarizes a user's parking by lot and by month.
    ///
    /// Session counts include active sessions; spend only counts completed ones.
    pub async fn user_summary(&self, user_id: i32) -> Result<UserSummary, AppError> {
        let history = SessionLedger::new(self.db).history_by_user(user_id).await?;

        let mut usage: HashMap<String, u64> = HashMap::new();
        let mut monthly: BTreeMap<String, f64> = BTreeMap::new();
        let mut by_lot: HashMap<String, f64> = HashMap::new();

        for entry in history {
            *usage.entry(entry.lot_name.clone()).or_default() += 1;

            if !entry.session.is_active() {
                let month = entry.session.entry_time.format("%Y-%m").to_string();
                *monthly.entry(month).or_default() += entry.session.amount_paid;
                *by_lot.entry(entry.lot_name).or_default() += entry.session.amount_paid;
            }
        }

        let mut usage_by_lot: Vec<(String, u64)> = usage.into_iter().collect();
        usage_by_lot.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let mut spend_by_lot: Vec<(String, f64)> = by_lot
            .into_iter()
            .map(|(lot, amount)| (lot, round2(amount)))
            .collect();
        spend_by_lot.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Ok(UserSummary {
            usage_by_lot,
            monthly_spend: monthly
                .into_iter()
                .map(|(month, amount)| (month, round2(amount)))
                .collect(),
            spend_by_lot,
        })
    }

    /// Builds the report for the calendar month before `now`.
    ///
    /// # Returns
    /// - `Ok(Some(MonthlyReport))` - The user entered at least one session that month
    /// - `Ok(None)` - Nothing to report
    pub async fn monthly_report(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<MonthlyReport>, AppError> {
        let (month, start, end) = previous_month(now)?;

        let entries = SessionLedger::new(self.db)
            .history_by_user_between(user_id, start, end)
            .await?;

        if entries.is_empty() {
            return Ok(None);
        }

        Ok(Some(MonthlyReport { month, entries }))
    }

    /// Sends last month's report to every driver who parked during it.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of reports delivered
    pub async fn send_monthly_reports(
        &self,
        notifier: &dyn Notifier,
        now: DateTime<Utc>,
    ) -> Result<usize, AppError> {
        let drivers = UserRepository::new(self.db).list_drivers().await?;
        let mut sent = 0;

        for user in drivers {
            let report = match self.monthly_report(user.id, now).await {
                Ok(Some(report)) => report,
                Ok(None) => continue,
                Err(e) => {
                    tracing::error!(
                        "Failed to build monthly report for user {}: {}",
                        user.id,
                        e
                    );
                    continue;
                }
            };

            let notification =
                Notification::html(user.email, report.subject(), report.render_html());
            if deliver(notifier, notification) {
                sent += 1;
            }
        }

        tracing::info!("Sent {} monthly reports", sent);

        Ok(sent)
    }

    /// Reminds every driver who has not entered a session in the last 24 hours.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of reminders delivered
    pub async fn send_daily_reminders(
        &self,
        notifier: &dyn Notifier,
        now: DateTime<Utc>,
    ) -> Result<usize, AppError> {
        let recent: HashSet<i32> = SessionLedger::new(self.db)
            .user_ids_entered_since(now - Duration::days(1))
            .await?
            .into_iter()
            .collect();

        let midnight = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        let new_lots = LotRepository::new(self.db)
            .count_created_since(midnight)
            .await?;

        let idle: Vec<User> = UserRepository::new(self.db)
            .list_drivers()
            .await?
            .into_iter()
            .filter(|u| !recent.contains(&u.id))
            .collect();

        let mut sent = 0;
        for user in idle {
            let reminder = Reminder {
                username: user.username,
                new_lots,
            };
            let notification =
                Notification::text(user.email, Reminder::SUBJECT, reminder.body());
            if deliver(notifier, notification) {
                sent += 1;
            }
        }

        tracing::info!("Sent {} daily reminders", sent);

        Ok(sent)
    }
}

fn deliver(notifier: &dyn Notifier, notification: Notification) -> bool {
    match notifier.deliver(notification) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("{}", e);
            false
        }
    }
}

/// Returns the first day of the month before `now` and its `[start, end)` window.
fn previous_month(
    now: DateTime<Utc>,
) -> Result<(NaiveDate, DateTime<Utc>, DateTime<Utc>), AppError> {
    let first_current = now
        .date_naive()
        .with_day(1)
        .ok_or_else(|| AppError::InternalError("Invalid current month".to_string()))?;
    let first_previous = first_current
        .checked_sub_months(Months::new(1))
        .ok_or_else(|| AppError::InternalError("Invalid previous month".to_string()))?;

    Ok((
        first_previous,
        first_previous.and_time(NaiveTime::MIN).and_utc(),
        first_current.and_time(NaiveTime::MIN).and_utc(),
    ))
}
