//! Fare calculation for completed sessions.
//!
//! Every session is billed at least one hour. Elapsed time is rounded to two decimals
//! before the minimum is applied, and the resulting amount is rounded to cents.

use chrono::{DateTime, Utc};

/// Fewest hours a session is billed for.
pub const MINIMUM_CHARGEABLE_HOURS: f64 = 1.0;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Billing breakdown of one session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fare {
    /// Exact elapsed hours, never negative.
    pub duration_hours: f64,
    /// Hours actually billed.
    pub chargeable_hours: f64,
    /// Amount due, rounded to two decimals.
    pub amount: f64,
}

/// Rounds half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Computes the fare of a session.
///
/// An exit earlier than the entry (clock skew) is treated as zero elapsed time and is
/// therefore billed the minimum.
///
/// # Arguments
/// - `entry` - Session entry time
/// - `exit` - Session exit time
/// - `rate_per_hour` - Hourly rate of the lot
///
/// # Returns
/// - `Fare` - Elapsed, chargeable hours and amount
pub fn calculate(entry: DateTime<Utc>, exit: DateTime<Utc>, rate_per_hour: f64) -> Fare {
    let elapsed_ms = (exit - entry).num_milliseconds().max(0);
    let duration_hours = elapsed_ms as f64 / MILLIS_PER_HOUR;
    let chargeable_hours = round2(duration_hours).max(MINIMUM_CHARGEABLE_HOURS);

    Fare {
        duration_hours,
        chargeable_hours,
        amount: round2(chargeable_hours * rate_per_hour),
    }
}
