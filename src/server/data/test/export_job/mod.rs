use crate::server::{data::export_job::ExportJobRepository, model::export::ExportStatus};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
