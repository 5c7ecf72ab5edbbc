use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::db::ContinenteModel;

pub struct ContinenteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContinenteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, nombre: String) -> Result<ContinenteModel, DbErr> {
        let continente = entity::continente::ActiveModel {
            nombre: ActiveValue::Set(nombre),
            ..Default::default()
        };

        continente.insert(self.db).await
    }

    /// Gets every continent ordered by ID
    pub async fn get_all(&self) -> Result<Vec<ContinenteModel>, DbErr> {
        entity::prelude::Continente::find()
            .order_by_asc(entity::continente::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_many_by_ids(&self, ids: &[i32]) -> Result<Vec<ContinenteModel>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Continente::find()
            .filter(entity::continente::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await
    }
}
