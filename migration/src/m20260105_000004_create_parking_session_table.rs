use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User,
    m20260105_000002_create_parking_lot_table::ParkingLot,
    m20260105_000003_create_parking_spot_table::ParkingSpot,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParkingSession::Table)
                    .if_not_exists()
                    .col(pk_auto(ParkingSession::Id))
                    .col(integer(ParkingSession::UserId))
                    .col(integer_null(ParkingSession::LotId))
                    .col(integer_null(ParkingSession::SpotId))
                    // Copied at park time so history outlives the lot.
                    .col(string(ParkingSession::LotName))
                    .col(string(ParkingSession::SpotLabel))
                    .col(string(ParkingSession::VehicleNumber))
                    .col(timestamp(ParkingSession::EntryTime))
                    .col(timestamp_null(ParkingSession::ExitTime))
                    .col(double(ParkingSession::AmountPaid).default(0.0))
                    .col(string(ParkingSession::Status).default("ACTIVE"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parking_session_user_id")
                            .from(ParkingSession::Table, ParkingSession::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parking_session_lot_id")
                            .from(ParkingSession::Table, ParkingSession::LotId)
                            .to(ParkingLot::Table, ParkingLot::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parking_session_spot_id")
                            .from(ParkingSession::Table, ParkingSession::SpotId)
                            .to(ParkingSpot::Table, ParkingSpot::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_parking_session_user_status")
                    .table(ParkingSession::Table)
                    .col(ParkingSession::UserId)
                    .col(ParkingSession::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParkingSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ParkingSession {
    Table,
    Id,
    UserId,
    LotId,
    SpotId,
    LotName,
    SpotLabel,
    VehicleNumber,
    EntryTime,
    ExitTime,
    AmountPaid,
    Status,
}
