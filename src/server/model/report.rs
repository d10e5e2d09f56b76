//! Monthly report and daily reminder contents.
//!
//! Both are rendered here from ledger data so the scheduler only decides who receives
//! what and hands the text to the notifier.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::server::model::session::HistoryEntry;

/// Parking activity of one driver during one calendar month.
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// First day of the reported month.
    pub month: NaiveDate,
    /// Sessions entered during the month, oldest first.
    pub entries: Vec<HistoryEntry>,
}

impl MonthlyReport {
    pub fn total_parkings(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all fees, rounded to cents.
    pub fn total_spent(&self) -> f64 {
        let total: f64 = self.entries.iter().map(|e| e.session.amount_paid).sum();
        (total * 100.0).round() / 100.0
    }

    /// Lot with the most sessions. Ties go to the lot name that sorts first.
    pub fn favorite_lot(&self) -> Option<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for entry in &self.entries {
            *counts.entry(entry.lot_name.as_str()).or_default() += 1;
        }

        counts
            .into_iter()
            .max_by(|(a_name, a), (b_name, b)| a.cmp(b).then_with(|| b_name.cmp(a_name)))
            .map(|(name, _)| name)
    }

    pub fn subject(&self) -> String {
        format!("Monthly Parking Report: {}", self.month.format("%B %Y"))
    }

    /// Renders the report as an HTML document with one table row per session.
    pub fn render_html(&self) -> String {
        let rows: String = self
            .entries
            .iter()
            .map(|e| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>${:.2}</td></tr>",
                    escape_html(&e.lot_name),
                    escape_html(&e.spot_label),
                    e.session.entry_time.format("%d-%m %H:%M"),
                    e.session.amount_paid
                )
            })
            .collect();

        format!(
            "<html><body>\
             <h1>{}</h1>\
             <p><strong>Total Parkings:</strong> {}</p>\
             <p><strong>Total Spent:</strong> ${:.2}</p>\
             <p><strong>Favorite Lot:</strong> {}</p>\
             <table border=\"1\">\
             <thead><tr><th>Lot</th><th>Spot</th><th>Date</th><th>Fee</th></tr></thead>\
             <tbody>{}</tbody>\
             </table>\
             </body></html>",
            escape_html(&self.subject()),
            self.total_parkings(),
            self.total_spent(),
            escape_html(self.favorite_lot().unwrap_or("N/A")),
            rows
        )
    }
}

/// Nudge for a driver who has not parked recently.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub username: String,
    /// Lots created since midnight UTC.
    pub new_lots: u64,
}

impl Reminder {
    pub const SUBJECT: &'static str = "Need a Parking Spot?";

    pub fn body(&self) -> String {
        if self.new_lots > 0 {
            format!(
                "Hello {},\n\nWe noticed you haven't parked with us lately. \
                 We have {} new parking locations available!\n\
                 You can check it out in our app's dashboard!",
                self.username, self.new_lots
            )
        } else {
            format!(
                "Hello {},\n\nSafe and secure parking is waiting for you. Book a spot today!",
                self.username
            )
        }
    }
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
