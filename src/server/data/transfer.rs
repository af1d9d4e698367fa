use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::transfer::Transfer;

pub struct TransferRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransferRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets transfers into a team, oldest first.
    pub async fn get_incoming(&self, team_id: i32) -> Result<Vec<Transfer>, DbErr> {
        let transfers = entity::prelude::Transfer::find()
            .filter(entity::transfer::Column::DestinyTeamId.eq(team_id))
            .order_by_asc(entity::transfer::Column::TransferDate)
            .order_by_asc(entity::transfer::Column::Id)
            .all(self.db)
            .await?;

        Ok(transfers.into_iter().map(Transfer::from_entity).collect())
    }

    /// Gets transfers out of a team, oldest first.
    pub async fn get_outgoing(&self, team_id: i32) -> Result<Vec<Transfer>, DbErr> {
        let transfers = entity::prelude::Transfer::find()
            .filter(entity::transfer::Column::OriginTeamId.eq(team_id))
            .order_by_asc(entity::transfer::Column::TransferDate)
            .order_by_asc(entity::transfer::Column::Id)
            .all(self.db)
            .await?;

        Ok(transfers.into_iter().map(Transfer::from_entity).collect())
    }
}
