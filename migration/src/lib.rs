pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_parking_lot_table;
mod m20260105_000003_create_parking_spot_table;
mod m20260105_000004_create_parking_session_table;
mod m20260112_000005_create_export_job_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_parking_lot_table::Migration),
            Box::new(m20260105_000003_create_parking_spot_table::Migration),
            Box::new(m20260105_000004_create_parking_session_table::Migration),
            Box::new(m20260112_000005_create_export_job_table::Migration),
        ]
    }
}
