//! Team domain model and parameters.

use chrono::NaiveDate;

use crate::model::team::TeamDto;

/// A registered team.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    /// Generated identifier.
    pub id: i32,
    /// Unique team name.
    pub name: String,
    /// State code (UF).
    pub uf: String,
    pub city: String,
    pub founding_date: NaiveDate,
}

impl Team {
    /// Converts an entity model at the repository boundary.
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            uf: entity.uf,
            city: entity.city,
            founding_date: entity.founding_date,
        }
    }

    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            name: self.name,
            uf: self.uf,
            city: self.city,
            founding_date: self.founding_date,
        }
    }
}

/// Validated parameters for inserting a team.
#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub name: String,
    pub uf: String,
    pub city: String,
    pub founding_date: NaiveDate,
}

/// Validated parameters for a partial team update.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateTeamParams {
    /// ID of the team to update.
    pub id: i32,
    pub name: Option<String>,
    pub uf: Option<String>,
    pub city: Option<String>,
    pub founding_date: Option<NaiveDate>,
}
