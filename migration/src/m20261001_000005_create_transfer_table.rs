use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000001_create_team_table::Team, m20261001_000002_create_player_table::Player,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transfer::Table)
                    .if_not_exists()
                    .col(pk_auto(Transfer::Id))
                    .col(integer_null(Transfer::PlayerId))
                    .col(integer(Transfer::OriginTeamId))
                    .col(integer(Transfer::DestinyTeamId))
                    .col(date(Transfer::TransferDate))
                    .col(big_integer(Transfer::Value))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transfer_player_id")
                            .from(Transfer::Table, Transfer::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transfer_origin_team_id")
                            .from(Transfer::Table, Transfer::OriginTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transfer_destiny_team_id")
                            .from(Transfer::Table, Transfer::DestinyTeamId)
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
            .drop_table(Table::drop().table(Transfer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Transfer {
    Table,
    Id,
    PlayerId,
    OriginTeamId,
    DestinyTeamId,
    TransferDate,
    Value,
}
