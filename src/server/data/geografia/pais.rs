use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::PaisModel;

pub struct PaisRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaisRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_many_by_ids(&self, ids: &[i32]) -> Result<Vec<PaisModel>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Pais::find()
            .filter(entity::pais::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Gets the countries of a continent ordered by ID
    pub async fn get_many_by_continente(
        &self,
        continente_id: i32,
    ) -> Result<Vec<PaisModel>, DbErr> {
        entity::prelude::Pais::find()
            .filter(entity::pais::Column::Continente.eq(continente_id))
            .order_by_asc(entity::pais::Column::Id)
            .all(self.db)
            .await
    }
}
