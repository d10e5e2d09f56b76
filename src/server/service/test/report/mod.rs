use crate::server::{
    error::AppError,
    notifier::MemoryNotifier,
    service::{admin::AdminService, report::ReportService},
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use test_utils::{
    builder::TestBuilder,
    factory::{self, parking_lot::LotFactory, parking_session::SessionFactory},
};

mod admin;
mod monthly;
mod reminder;
mod summary;

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}
