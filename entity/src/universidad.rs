use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "universidad")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub pais: Option<i32>,
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
