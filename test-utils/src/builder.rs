use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Creates in-memory parking databases for tests.
///
/// Tables come from the entity definitions rather than the migrations, including their
/// foreign key actions: spots cascade with their lot, sessions are detached (`SET
/// NULL`) from a deleted lot or spot and cascade with their user.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new().with_parking_tables().build().await?;
/// let db = test.db.as_ref().unwrap();
/// let (lot, spots) = factory::create_lot(db).await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds the table of one entity.
    ///
    /// A table must be added after every table its foreign keys point to.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds `user`, `parking_lot`, `parking_spot` and `parking_session`.
    ///
    /// Enough for the allocator, the fare calculator, lot administration, summaries
    /// and reports.
    pub fn with_parking_tables(self) -> Self {
        self.with_table(User)
            .with_table(ParkingLot)
            .with_table(ParkingSpot)
            .with_table(ParkingSession)
    }

    /// Adds the parking tables plus `export_job`, for CSV export tests.
    pub fn with_export_tables(self) -> Self {
        self.with_parking_tables().with_table(ExportJob)
    }

    /// Connects to a fresh single-connection in-memory database and creates the tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the schema in place
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
