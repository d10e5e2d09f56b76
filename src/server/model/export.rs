//! CSV export job domain models.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::fmt;

use crate::model::export::ExportJobDto;

/// Progress of a CSV export job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStatus {
    Pending,
    Started,
    Success,
    Failure,
}

impl ExportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Started => "STARTED",
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
        }
    }

    pub fn parse(value: &str) -> Result<Self, DbErr> {
        match value {
            "PENDING" => Ok(Self::Pending),
            "STARTED" => Ok(Self::Started),
            "SUCCESS" => Ok(Self::Success),
            "FAILURE" => Ok(Self::Failure),
            other => Err(DbErr::Custom(format!("Unknown export job status: {}", other))),
        }
    }
}

impl fmt::Display for ExportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Background export of a user's parking history.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportJob {
    pub id: i32,
    pub user_id: i32,
    pub status: ExportStatus,
    /// Location of the written CSV once the job succeeded.
    pub file_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl ExportJob {
    pub fn from_entity(entity: entity::export_job::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            status: ExportStatus::parse(&entity.status)?,
            file_path: entity.file_path,
            created_at: entity.created_at,
            completed_at: entity.completed_at,
        })
    }

    /// Converts to a DTO; the file path is only exposed after success.
    pub fn into_dto(self) -> ExportJobDto {
        let file_path = match self.status {
            ExportStatus::Success => self.file_path,
            _ => None,
        };

        ExportJobDto {
            job_id: self.id,
            status: self.status.to_string(),
            file_path,
        }
    }
}
