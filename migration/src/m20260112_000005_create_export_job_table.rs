use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExportJob::Table)
                    .if_not_exists()
                    .col(pk_auto(ExportJob::Id))
                    .col(integer(ExportJob::UserId))
                    .col(string(ExportJob::Status).default("PENDING"))
                    .col(string_null(ExportJob::FilePath))
                    .col(
                        timestamp(ExportJob::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(ExportJob::CompletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_export_job_user_id")
                            .from(ExportJob::Table, ExportJob::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExportJob::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ExportJob {
    Table,
    Id,
    UserId,
    Status,
    FilePath,
    CreatedAt,
    CompletedAt,
}
