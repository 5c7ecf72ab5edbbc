use sea_orm::entity::prelude::*;

/// Attendance of a `pre_uach` applicant to a benefit.
///
/// Rows are removed together with the referenced benefit or applicant.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "asistente")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub beneficio: i32,
    pub postulante: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::beneficio::Entity",
        from = "Column::Beneficio",
        to = "super::beneficio::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Beneficio,
    #[sea_orm(
        belongs_to = "super::pre_uach::Entity",
        from = "Column::Postulante",
        to = "super::pre_uach::Column::Postulante",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    PreUach,
}

impl Related<super::beneficio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Beneficio.def()
    }
}

impl Related<super::pre_uach::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PreUach.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
