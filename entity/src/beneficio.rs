use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "beneficio")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::asistente::Entity")]
    Asistente,
}

impl Related<super::asistente::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asistente.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
