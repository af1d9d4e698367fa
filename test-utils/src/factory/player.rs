//! Player factory for creating test player entities.

use crate::factory::helpers::{next_cpf, next_id};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// The default CPF is unique and passes checksum validation.
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    cpf: String,
    birth_date: NaiveDate,
    team_id: Option<i32>,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Player {id}"`
    /// - cpf: generated valid CPF
    /// - birth_date: `1995-06-15`
    /// - team_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Player {}", next_id()),
            cpf: next_cpf(),
            birth_date: NaiveDate::from_ymd_opt(1995, 6, 15).unwrap_or_default(),
            team_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn cpf(mut self, cpf: impl Into<String>) -> Self {
        self.cpf = cpf.into();
        self
    }

    pub fn birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = birth_date;
        self
    }

    pub fn team_id(mut self, team_id: Option<i32>) -> Self {
        self.team_id = team_id;
        self
    }

    /// Builds and inserts the player entity into the database.
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            name: ActiveValue::Set(self.name),
            cpf: ActiveValue::Set(self.cpf),
            birth_date: ActiveValue::Set(self.birth_date),
            team_id: ActiveValue::Set(self.team_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values registered to `team_id`.
pub async fn create_player(
    db: &DatabaseConnection,
    team_id: i32,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).team_id(Some(team_id)).build().await
}
