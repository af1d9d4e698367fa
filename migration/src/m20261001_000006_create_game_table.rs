use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_team_table::Team,
    m20261001_000003_create_tournament_table::Tournament,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(integer(Game::HomeTeamId))
                    .col(integer(Game::AwayTeamId))
                    .col(integer_null(Game::TournamentId))
                    .col(date(Game::MatchDate))
                    .col(integer_null(Game::HomeGoals))
                    .col(integer_null(Game::AwayGoals))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_home_team_id")
                            .from(Game::Table, Game::HomeTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_away_team_id")
                            .from(Game::Table, Game::AwayTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_tournament_id")
                            .from(Game::Table, Game::TournamentId)
                            .to(Tournament::Table, Tournament::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Id,
    HomeTeamId,
    AwayTeamId,
    TournamentId,
    MatchDate,
    HomeGoals,
    AwayGoals,
}
