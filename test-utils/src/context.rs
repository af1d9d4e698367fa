use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection,
};

use crate::error::TestError;

/// A fresh in-memory SQLite database owned by one test.
///
/// Foreign keys are switched on explicitly so that the cascade and set-null rules on the
/// schema behave the same way they do in production.
pub struct TestContext {
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Opens a new in-memory database with foreign key enforcement enabled.
    pub async fn connect() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;
        db.execute_unprepared("PRAGMA foreign_keys = ON").await?;

        Ok(Self { db })
    }

    /// Runs the CREATE TABLE statements in order.
    ///
    /// Referenced tables must come before the tables pointing at them.
    pub async fn create_tables(&self, stmts: &[TableCreateStatement]) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(stmt).await?;
        }

        Ok(())
    }
}
