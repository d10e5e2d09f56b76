//! Export job repository.
//!
//! Tracks the status of background CSV exports. Lookups are scoped to the owning user
//! so one user can never read another user's job.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};

use crate::server::model::export::{ExportJob, ExportStatus};

pub struct ExportJobRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExportJobRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a job for the user in the given initial status.
    pub async fn create(
        &self,
        user_id: i32,
        status: ExportStatus,
        created_at: DateTime<Utc>,
    ) -> Result<ExportJob, DbErr> {
        let entity = entity::export_job::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            status: ActiveValue::Set(status.as_str().to_string()),
            file_path: ActiveValue::Set(None),
            created_at: ActiveValue::Set(created_at),
            completed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        ExportJob::from_entity(entity)
    }

    /// Finds a job by ID if it belongs to the user.
    ///
    /// # Returns
    /// - `Ok(Some(ExportJob))` - The user's job
    /// - `Ok(None)` - No such job, or it belongs to another user
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_for_user(
        &self,
        job_id: i32,
        user_id: i32,
    ) -> Result<Option<ExportJob>, DbErr> {
        entity::prelude::ExportJob::find_by_id(job_id)
            .filter(entity::export_job::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
            .map(ExportJob::from_entity)
            .transpose()
    }

    /// Records a successful export with its file path.
    pub async fn mark_success(
        &self,
        job_id: i32,
        file_path: &str,
        completed_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::ExportJob::update_many()
            .filter(entity::export_job::Column::Id.eq(job_id))
            .col_expr(
                entity::export_job::Column::Status,
                Expr::value(ExportStatus::Success.as_str()),
            )
            .col_expr(
                entity::export_job::Column::FilePath,
                Expr::value(Some(file_path.to_string())),
            )
            .col_expr(
                entity::export_job::Column::CompletedAt,
                Expr::value(Some(completed_at)),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Records a failed export.
    pub async fn mark_failure(
        &self,
        job_id: i32,
        completed_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::ExportJob::update_many()
            .filter(entity::export_job::Column::Id.eq(job_id))
            .col_expr(
                entity::export_job::Column::Status,
                Expr::value(ExportStatus::Failure.as_str()),
            )
            .col_expr(
                entity::export_job::Column::CompletedAt,
                Expr::value(Some(completed_at)),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
