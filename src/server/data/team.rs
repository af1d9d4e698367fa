//! Team data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::team::{CreateTeamParams, Team, UpdateTeamParams};

/// Repository providing database operations for teams.
pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    /// Creates a new TeamRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TeamRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new team.
    ///
    /// # Arguments
    /// - `params` - Validated team fields
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team with its generated id
    /// - `Err(DbErr)` - Database error, including unique violations on `name`
    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, DbErr> {
        let entity = entity::team::ActiveModel {
            name: ActiveValue::Set(params.name),
            uf: ActiveValue::Set(params.uf),
            city: ActiveValue::Set(params.city),
            founding_date: ActiveValue::Set(params.founding_date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(entity))
    }

    /// Finds a team by its exact name.
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - Team with that name
    /// - `Ok(None)` - No team has that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find()
            .filter(entity::team::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Finds a team by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Applies a partial update, writing only the fields present in `params`.
    ///
    /// # Returns
    /// - `Ok(Team)` - The team after the update
    /// - `Err(DbErr::RecordNotFound)` - No team with `params.id`
    /// - `Err(DbErr)` - Other database error, including unique violations on `name`
    pub async fn update(&self, params: UpdateTeamParams) -> Result<Team, DbErr> {
        let team = entity::prelude::Team::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Team with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::team::ActiveModel = team.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(uf) = params.uf {
            active_model.uf = ActiveValue::Set(uf);
        }
        if let Some(city) = params.city {
            active_model.city = ActiveValue::Set(city);
        }
        if let Some(founding_date) = params.founding_date {
            active_model.founding_date = ActiveValue::Set(founding_date);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Team::from_entity(entity))
    }

    /// Deletes a team by id.
    ///
    /// The schema detaches the team's players and removes its transfers, matches and
    /// tournament memberships.
    ///
    /// # Returns
    /// - `Ok(true)` - A team was deleted
    /// - `Ok(false)` - No team with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Team::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
