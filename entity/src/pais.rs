use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pais")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub continente: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::continente::Entity",
        from = "Column::Continente",
        to = "super::continente::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Continente,
}

impl Related<super::continente::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Continente.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
