use sea_orm::DatabaseConnection;

use crate::{
    model::{
        date::parse_date,
        team::{CreateTeamDto, UpdateTeamDto},
    },
    server::{
        data::{player::PlayerRepository, team::TeamRepository, transfer::TransferRepository},
        error::AppError,
        model::{
            player::Player,
            team::{CreateTeamParams, Team, UpdateTeamParams},
            transfer::TeamTransfers,
        },
        service::{is_unique_violation, INVALID_FOUNDING_DATE, NAME_TAKEN},
        util::parse::non_empty,
    },
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a team by its exact name
    pub async fn get_by_name(&self, name: &str) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }

    /// Gets a team by id
    pub async fn get_by_id(&self, id: i32) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }

    /// Validates and registers a new team.
    ///
    /// Every validation rule runs before responding so the caller receives the full list
    /// of problems in one round trip.
    pub async fn create(&self, payload: CreateTeamDto) -> Result<Team, AppError> {
        let repo = TeamRepository::new(self.db);
        let mut errors = Vec::new();

        if repo.find_by_name(&payload.name).await?.is_some() {
            errors.push(NAME_TAKEN.to_string());
        }

        let founding_date = parse_date(&payload.founding_date).ok();
        if founding_date.is_none() {
            errors.push(INVALID_FOUNDING_DATE.to_string());
        }

        let founding_date = match founding_date {
            Some(date) if errors.is_empty() => date,
            _ => return Err(AppError::Validation(errors)),
        };

        let team = repo
            .create(CreateTeamParams {
                name: payload.name,
                uf: payload.uf,
                city: payload.city,
                founding_date,
            })
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::Validation(vec![NAME_TAKEN.to_string()])
                } else {
                    e.into()
                }
            })?;

        tracing::info!("Created team {} ({})", team.id, team.name);

        Ok(team)
    }

    /// Applies a partial update to a team.
    ///
    /// Only non-empty supplied fields are written. A malformed founding date rejects the
    /// whole update immediately rather than being collected with other errors.
    pub async fn update(&self, id: i32, payload: UpdateTeamDto) -> Result<Team, AppError> {
        let repo = TeamRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Team not found".to_string()));
        }

        let founding_date = match non_empty(payload.founding_date) {
            Some(value) => Some(
                parse_date(&value)
                    .map_err(|_| AppError::Validation(vec![INVALID_FOUNDING_DATE.to_string()]))?,
            ),
            None => None,
        };

        let team = repo
            .update(UpdateTeamParams {
                id,
                name: non_empty(payload.name),
                uf: non_empty(payload.uf),
                city: non_empty(payload.city),
                founding_date,
            })
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::Validation(vec![NAME_TAKEN.to_string()])
                } else {
                    e.into()
                }
            })?;

        tracing::info!("Updated team {} ({})", team.id, team.name);

        Ok(team)
    }

    /// Deletes a team; the schema cascades to its dependent rows
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = TeamRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Team not found".to_string()));
        }

        repo.delete(id).await?;

        tracing::info!("Deleted team {}", id);

        Ok(())
    }

    /// Gets the players registered to a team.
    ///
    /// The team itself is not looked up, so an unknown id yields an empty list.
    pub async fn get_players(&self, id: i32) -> Result<Vec<Player>, AppError> {
        Ok(PlayerRepository::new(self.db).get_by_team_id(id).await?)
    }

    /// Gets the incoming and outgoing transfers of a team.
    ///
    /// Like `get_players`, an unknown id yields an empty summary.
    pub async fn get_transfers(&self, id: i32) -> Result<TeamTransfers, AppError> {
        let repo = TransferRepository::new(self.db);

        let incoming = repo.get_incoming(id).await?;
        let outgoing = repo.get_outgoing(id).await?;

        Ok(TeamTransfers {
            team_id: id,
            incoming,
            outgoing,
        })
    }
}
