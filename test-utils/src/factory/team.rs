//! Team factory for creating test team entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let team = TeamFactory::new(&db)
///     .name("Cruzeiro")
///     .city("Belo Horizonte")
///     .build()
///     .await?;
/// ```
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    uf: String,
    city: String,
    founding_date: NaiveDate,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Team {id}"` where id is auto-incremented
    /// - uf: `"MG"`
    /// - city: `"City {id}"`
    /// - founding_date: `1921-01-02`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Team {}", id),
            uf: "MG".to_string(),
            city: format!("City {}", id),
            founding_date: NaiveDate::from_ymd_opt(1921, 1, 2).unwrap_or_default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn uf(mut self, uf: impl Into<String>) -> Self {
        self.uf = uf.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn founding_date(mut self, founding_date: NaiveDate) -> Self {
        self.founding_date = founding_date;
        self
    }

    /// Builds and inserts the team entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::team::Model)` - Created team entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            name: ActiveValue::Set(self.name),
            uf: ActiveValue::Set(self.uf),
            city: ActiveValue::Set(self.city),
            founding_date: ActiveValue::Set(self.founding_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values.
///
/// Shorthand for `TeamFactory::new(db).build().await`.
pub async fn create_team(db: &DatabaseConnection) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db).build().await
}
