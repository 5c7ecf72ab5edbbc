use sea_orm::entity::prelude::*;

/// A city.
///
/// `pais` holds a country ID but carries no foreign key: seeded development data
/// references arbitrary country IDs.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ciudad")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub pais: i32,
    pub codigo_postal: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::campus_sede::Entity")]
    CampusSede,
}

impl Related<super::campus_sede::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampusSede.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
