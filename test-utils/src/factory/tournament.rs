//! Tournament factory for creating tournaments and their team memberships.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a tournament named `"Tournament {id}"`.
pub async fn create_tournament(
    db: &DatabaseConnection,
) -> Result<entity::tournament::Model, DbErr> {
    entity::tournament::ActiveModel {
        name: ActiveValue::Set(format!("Tournament {}", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Registers a team as a participant of a tournament.
pub async fn add_team_to_tournament(
    db: &DatabaseConnection,
    tournament_id: i32,
    team_id: i32,
) -> Result<entity::tournament_team::Model, DbErr> {
    entity::tournament_team::ActiveModel {
        tournament_id: ActiveValue::Set(tournament_id),
        team_id: ActiveValue::Set(team_id),
    }
    .insert(db)
    .await
}
