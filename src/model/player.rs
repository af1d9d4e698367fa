use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub id: i32,
    pub name: String,
    pub cpf: String,
    #[serde(with = "crate::model::date::wire")]
    #[schema(value_type = String, example = "15/06/1995")]
    pub birth_date: NaiveDate,
    pub team_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerDto {
    pub name: String,
    #[schema(example = "52998224725")]
    pub cpf: String,
    #[schema(example = "15/06/1995")]
    pub birth_date: String,
}
