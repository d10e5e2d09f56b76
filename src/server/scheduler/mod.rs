//! Cron jobs run alongside the HTTP server.

pub mod reports;
