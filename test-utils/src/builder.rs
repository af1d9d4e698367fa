use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Collects the tables a test needs and opens a [`TestContext`] with them.
///
/// ```rust,ignore
/// let test = TestBuilder::new().with_team_tables().build().await?;
/// let team = factory::create_team(&test.db).await?;
/// ```
pub struct TestBuilder {
    schema: Schema,
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            schema: Schema::new(DbBackend::Sqlite),
            tables: Vec::new(),
        }
    }

    /// Adds the table for `entity`, foreign keys included.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        self.tables.push(self.schema.create_table_from_entity(entity));
        self
    }

    /// Adds the whole team registry schema: team, player, tournament, tournament_team,
    /// transfer and game.
    pub fn with_team_tables(self) -> Self {
        self.with_table(Team)
            .with_table(Player)
            .with_table(Tournament)
            .with_table(TournamentTeam)
            .with_table(Transfer)
            .with_table(Game)
    }

    /// Opens the database and creates the collected tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::connect().await?;
        context.create_tables(&self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
