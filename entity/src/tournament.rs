use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tournament")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tournament_team::Entity")]
    TournamentTeam,
}

impl Related<super::tournament_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TournamentTeam.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        super::tournament_team::Relation::Team.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::tournament_team::Relation::Tournament.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
