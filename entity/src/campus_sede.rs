use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "campus_sede")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub telefono: Option<String>,
    pub fax: Option<String>,
    pub sitio_web: Option<String>,
    pub universidad: i32,
    pub ciudad: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::universidad::Entity",
        from = "Column::Universidad",
        to = "super::universidad::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Universidad,
    #[sea_orm(
        belongs_to = "super::ciudad::Entity",
        from = "Column::Ciudad",
        to = "super::ciudad::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Ciudad,
}

impl Related<super::universidad::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Universidad.def()
    }
}

impl Related<super::ciudad::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ciudad.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
