//! Transfer factory for creating test transfers between teams.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test transfers with customizable fields.
pub struct TransferFactory<'a> {
    db: &'a DatabaseConnection,
    player_id: Option<i32>,
    origin_team_id: i32,
    destiny_team_id: i32,
    transfer_date: NaiveDate,
    value: i64,
}

impl<'a> TransferFactory<'a> {
    /// Creates a new TransferFactory moving no particular player between two teams.
    ///
    /// Defaults:
    /// - player_id: `None`
    /// - transfer_date: `2020-01-31`
    /// - value: `1_000_000`
    pub fn new(db: &'a DatabaseConnection, origin_team_id: i32, destiny_team_id: i32) -> Self {
        Self {
            db,
            player_id: None,
            origin_team_id,
            destiny_team_id,
            transfer_date: NaiveDate::from_ymd_opt(2020, 1, 31).unwrap_or_default(),
            value: 1_000_000,
        }
    }

    pub fn player_id(mut self, player_id: Option<i32>) -> Self {
        self.player_id = player_id;
        self
    }

    pub fn transfer_date(mut self, transfer_date: NaiveDate) -> Self {
        self.transfer_date = transfer_date;
        self
    }

    pub fn value(mut self, value: i64) -> Self {
        self.value = value;
        self
    }

    /// Builds and inserts the transfer entity into the database.
    pub async fn build(self) -> Result<entity::transfer::Model, DbErr> {
        entity::transfer::ActiveModel {
            player_id: ActiveValue::Set(self.player_id),
            origin_team_id: ActiveValue::Set(self.origin_team_id),
            destiny_team_id: ActiveValue::Set(self.destiny_team_id),
            transfer_date: ActiveValue::Set(self.transfer_date),
            value: ActiveValue::Set(self.value),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a transfer with default values from `origin_team_id` to `destiny_team_id`.
pub async fn create_transfer(
    db: &DatabaseConnection,
    origin_team_id: i32,
    destiny_team_id: i32,
) -> Result<entity::transfer::Model, DbErr> {
    TransferFactory::new(db, origin_team_id, destiny_team_id)
        .build()
        .await
}
