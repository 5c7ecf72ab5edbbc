use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "continente")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(9))")]
    pub nombre: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pais::Entity")]
    Pais,
}

impl Related<super::pais::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pais.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
