//! Transfer domain model and the per-team transfer summary.

use chrono::NaiveDate;

use crate::model::transfer::{TeamTransfersDto, TransferDto};

/// A player transfer from one team to another.
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub id: i32,
    pub player_id: Option<i32>,
    pub origin_team_id: i32,
    pub destiny_team_id: i32,
    pub transfer_date: NaiveDate,
    pub value: i64,
}

impl Transfer {
    /// Converts an entity model at the repository boundary.
    pub fn from_entity(entity: entity::transfer::Model) -> Self {
        Self {
            id: entity.id,
            player_id: entity.player_id,
            origin_team_id: entity.origin_team_id,
            destiny_team_id: entity.destiny_team_id,
            transfer_date: entity.transfer_date,
            value: entity.value,
        }
    }

    pub fn into_dto(self) -> TransferDto {
        TransferDto {
            id: self.id,
            player_id: self.player_id,
            origin_team_id: self.origin_team_id,
            destiny_team_id: self.destiny_team_id,
            transfer_date: self.transfer_date,
            value: self.value,
        }
    }
}

/// Transfers involving a team, split by direction.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamTransfers {
    pub team_id: i32,
    /// Transfers whose destiny is the team.
    pub incoming: Vec<Transfer>,
    /// Transfers whose origin is the team.
    pub outgoing: Vec<Transfer>,
}

impl TeamTransfers {
    /// Sum of incoming transfer values, saturating at the `i64` bounds.
    pub fn total_spent(&self) -> i64 {
        total(&self.incoming)
    }

    /// Sum of outgoing transfer values, saturating at the `i64` bounds.
    pub fn total_received(&self) -> i64 {
        total(&self.outgoing)
    }

    pub fn into_dto(self) -> TeamTransfersDto {
        let total_spent = self.total_spent();
        let total_received = self.total_received();

        TeamTransfersDto {
            team_id: self.team_id,
            incoming: self.incoming.into_iter().map(Transfer::into_dto).collect(),
            outgoing: self.outgoing.into_iter().map(Transfer::into_dto).collect(),
            total_spent,
            total_received,
        }
    }
}

fn total(transfers: &[Transfer]) -> i64 {
    transfers
        .iter()
        .fold(0i64, |sum, t| sum.saturating_add(t.value))
}
