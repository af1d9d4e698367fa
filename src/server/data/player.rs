//! Player data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::player::{CreatePlayerParams, Player};

/// Repository providing database operations for players.
pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new player registered to `params.team_id`.
    ///
    /// # Returns
    /// - `Ok(Player)` - The created player with its generated id
    /// - `Err(DbErr)` - Database error, including unique violations on `cpf`
    pub async fn create(&self, params: CreatePlayerParams) -> Result<Player, DbErr> {
        let entity = entity::player::ActiveModel {
            name: ActiveValue::Set(params.name),
            cpf: ActiveValue::Set(params.cpf),
            birth_date: ActiveValue::Set(params.birth_date),
            team_id: ActiveValue::Set(Some(params.team_id)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Player::from_entity(entity))
    }

    /// Finds the player registered under `cpf`.
    pub async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Player>, DbErr> {
        let entity = entity::prelude::Player::find()
            .filter(entity::player::Column::Cpf.eq(cpf))
            .one(self.db)
            .await?;

        Ok(entity.map(Player::from_entity))
    }

    /// Gets all players registered to a team, ordered by id.
    ///
    /// An unknown team id yields an empty list.
    pub async fn get_by_team_id(&self, team_id: i32) -> Result<Vec<Player>, DbErr> {
        let players = entity::prelude::Player::find()
            .filter(entity::player::Column::TeamId.eq(team_id))
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await?;

        Ok(players.into_iter().map(Player::from_entity).collect())
    }
}
