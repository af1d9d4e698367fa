use sea_orm::DatabaseConnection;

use crate::{
    model::{date::parse_date, player::CreatePlayerDto},
    server::{
        data::{player::PlayerRepository, team::TeamRepository},
        error::AppError,
        model::player::{CreatePlayerParams, Player},
        service::{
            is_foreign_key_violation, is_unique_violation, CPF_TAKEN, INVALID_BIRTH_DATE,
            INVALID_CPF, TEAM_NOT_EXISTS,
        },
        util::cpf::is_valid_cpf,
    },
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and registers a new player in a team.
    ///
    /// Checks, in order and all collected before responding: CPF not yet registered, CPF
    /// checksum, birth date format, team existence.
    pub async fn create(&self, team_id: i32, payload: CreatePlayerDto) -> Result<Player, AppError> {
        let player_repo = PlayerRepository::new(self.db);
        let team_repo = TeamRepository::new(self.db);
        let mut errors = Vec::new();

        if player_repo.find_by_cpf(&payload.cpf).await?.is_some() {
            errors.push(CPF_TAKEN.to_string());
        }

        if !is_valid_cpf(&payload.cpf) {
            errors.push(INVALID_CPF.to_string());
        }

        let birth_date = parse_date(&payload.birth_date).ok();
        if birth_date.is_none() {
            errors.push(INVALID_BIRTH_DATE.to_string());
        }

        if team_repo.find_by_id(team_id).await?.is_none() {
            errors.push(TEAM_NOT_EXISTS.to_string());
        }

        let birth_date = match birth_date {
            Some(date) if errors.is_empty() => date,
            _ => return Err(AppError::Validation(errors)),
        };

        let player = player_repo
            .create(CreatePlayerParams {
                team_id,
                name: payload.name,
                cpf: payload.cpf,
                birth_date,
            })
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::Validation(vec![CPF_TAKEN.to_string()])
                } else if is_foreign_key_violation(&e) {
                    AppError::Validation(vec![TEAM_NOT_EXISTS.to_string()])
                } else {
                    e.into()
                }
            })?;

        tracing::info!("Registered player {} in team {}", player.id, team_id);

        Ok(player)
    }
}
