use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferDto {
    pub id: i32,
    pub player_id: Option<i32>,
    pub origin_team_id: i32,
    pub destiny_team_id: i32,
    #[serde(with = "crate::model::date::wire")]
    #[schema(value_type = String, example = "31/01/2020")]
    pub transfer_date: NaiveDate,
    pub value: i64,
}

/// Transfers involving a team, split by direction.
///
/// `total_spent` sums the incoming transfers (the team paid) and `total_received`
/// sums the outgoing ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamTransfersDto {
    pub team_id: i32,
    pub incoming: Vec<TransferDto>,
    pub outgoing: Vec<TransferDto>,
    pub total_spent: i64,
    pub total_received: i64,
}
