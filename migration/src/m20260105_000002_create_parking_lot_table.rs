use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParkingLot::Table)
                    .if_not_exists()
                    .col(pk_auto(ParkingLot::Id))
                    .col(string(ParkingLot::Name))
                    .col(text_null(ParkingLot::Location))
                    .col(integer(ParkingLot::Capacity))
                    .col(double(ParkingLot::RatePerHour).default(10.0))
                    .col(
                        timestamp(ParkingLot::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParkingLot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ParkingLot {
    Table,
    Id,
    Name,
    Location,
    Capacity,
    RatePerHour,
    CreatedAt,
}
