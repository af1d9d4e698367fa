//! Player domain model and parameters.

use chrono::NaiveDate;

use crate::model::player::PlayerDto;

/// A registered player.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i32,
    pub name: String,
    /// Eleven-digit CPF, unique across players.
    pub cpf: String,
    pub birth_date: NaiveDate,
    /// Team the player is registered to; `None` once that team is deleted.
    pub team_id: Option<i32>,
}

impl Player {
    /// Converts an entity model at the repository boundary.
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            cpf: entity.cpf,
            birth_date: entity.birth_date,
            team_id: entity.team_id,
        }
    }

    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            name: self.name,
            cpf: self.cpf,
            birth_date: self.birth_date,
            team_id: self.team_id,
        }
    }
}

/// Validated parameters for inserting a player into a team.
#[derive(Debug, Clone)]
pub struct CreatePlayerParams {
    pub team_id: i32,
    pub name: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
}
