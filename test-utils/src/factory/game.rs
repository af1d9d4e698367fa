//! Match factory for creating test games between two teams.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an unplayed match between `home_team_id` and `away_team_id`, optionally
/// as part of a tournament.
pub async fn create_game(
    db: &DatabaseConnection,
    home_team_id: i32,
    away_team_id: i32,
    tournament_id: Option<i32>,
) -> Result<entity::game::Model, DbErr> {
    entity::game::ActiveModel {
        home_team_id: ActiveValue::Set(home_team_id),
        away_team_id: ActiveValue::Set(away_team_id),
        tournament_id: ActiveValue::Set(tournament_id),
        match_date: ActiveValue::Set(NaiveDate::from_ymd_opt(2021, 5, 9).unwrap_or_default()),
        home_goals: ActiveValue::Set(None),
        away_goals: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
