//! Outbound notifications.
//!
//! Reminders, monthly reports and finished exports are handed to a `Notifier`. The
//! service ships with `LogNotifier`, which writes each notification to the log; a mail
//! or push sink can be swapped in through `AppState` without touching the callers.

use thiserror::Error;

/// File attached to a notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Message addressed to a single user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Recipient address.
    pub to: String,
    pub subject: String,
    pub body: String,
    /// Whether `body` is an HTML document.
    pub html: bool,
    pub attachment: Option<Attachment>,
}

impl Notification {
    pub fn text(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            html: false,
            attachment: None,
        }
    }

    pub fn html(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            html: true,
            ..Self::text(to, subject, body)
        }
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }
}

#[derive(Error, Debug)]
#[error("Failed to deliver notification to {to}: {reason}")]
pub struct NotifyError {
    pub to: String,
    pub reason: String,
}

/// Sink for outbound notifications.
///
/// Delivery is best effort. Callers log failures and carry on.
pub trait Notifier: Send + Sync {
    fn deliver(&self, notification: Notification) -> Result<(), NotifyError>;
}

/// Notifier that logs every notification at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn deliver(&self, notification: Notification) -> Result<(), NotifyError> {
        tracing::info!(
            to = %notification.to,
            subject = %notification.subject,
            html = notification.html,
            attachment = notification.attachment.as_ref().map(|a| a.filename.as_str()),
            "Notification sent"
        );
        tracing::debug!("{}", notification.body);

        Ok(())
    }
}

/// Notifier that keeps every notification in memory for inspection in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    sent: std::sync::Mutex<Vec<Notification>>,
}

#[cfg(test)]
impl MemoryNotifier {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl Notifier for MemoryNotifier {
    fn deliver(&self, notification: Notification) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .map_err(|e| NotifyError {
                to: notification.to.clone(),
                reason: e.to_string(),
            })?
            .push(notification);

        Ok(())
    }
}
