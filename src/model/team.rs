use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub uf: String,
    pub city: String,
    #[serde(with = "crate::model::date::wire")]
    #[schema(value_type = String, example = "02/01/1921")]
    pub founding_date: NaiveDate,
}

/// Payload for registering a team.
///
/// `founding_date` is kept as the raw string so that a malformed date is reported
/// alongside the other validation errors instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamDto {
    pub name: String,
    pub uf: String,
    pub city: String,
    #[schema(example = "02/01/1921")]
    pub founding_date: String,
}

/// Partial update payload; absent or empty fields leave the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub uf: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    #[schema(example = "02/01/1921")]
    pub founding_date: Option<String>,
}
