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
                    .table(TournamentTeam::Table)
                    .if_not_exists()
                    .col(integer(TournamentTeam::TournamentId))
                    .col(integer(TournamentTeam::TeamId))
                    .primary_key(
                        Index::create()
                            .col(TournamentTeam::TournamentId)
                            .col(TournamentTeam::TeamId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tournament_team_tournament_id")
                            .from(TournamentTeam::Table, TournamentTeam::TournamentId)
                            .to(Tournament::Table, Tournament::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tournament_team_team_id")
                            .from(TournamentTeam::Table, TournamentTeam::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TournamentTeam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TournamentTeam {
    Table,
    TournamentId,
    TeamId,
}
