use crate::server::{
    data::session::SessionLedger,
    model::session::{OpenSessionParams, SessionStatus},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod history_by_user;
mod open;
