//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through
//! Axum's state extraction. Every field is cheap to clone: the database connection
//! shares its pool and the rest sit behind `Arc`.

use sea_orm::DatabaseConnection;
use std::path::PathBuf;
use std::sync::Arc;

use crate::server::{notifier::Notifier, util::lock::ParkingLocks};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool of the SQLite database.
    pub db: DatabaseConnection,

    /// Per-user and per-lot locks serializing park, unpark and lot deletion.
    ///
    /// Must be the single instance for the process; a second set would let two
    /// requests for the same user interleave.
    pub locks: Arc<ParkingLocks>,

    /// Sink for reminders, reports and finished exports.
    pub notifier: Arc<dyn Notifier>,

    /// Directory CSV exports are written to.
    pub export_dir: PathBuf,
}

impl AppState {
    pub fn new(db: DatabaseConnection, notifier: Arc<dyn Notifier>, export_dir: PathBuf) -> Self {
        Self {
            db,
            locks: Arc::new(ParkingLocks::new()),
            notifier,
            export_dir,
        }
    }
}
