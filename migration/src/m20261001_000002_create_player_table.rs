use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_team_table::Team;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string(Player::Name))
                    .col(string_len_uniq(Player::Cpf, 11))
                    .col(date(Player::BirthDate))
                    .col(integer_null(Player::TeamId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_team_id")
                            .from(Player::Table, Player::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_player_team_id")
                    .table(Player::Table)
                    .col(Player::TeamId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    Name,
    Cpf,
    BirthDate,
    TeamId,
}
