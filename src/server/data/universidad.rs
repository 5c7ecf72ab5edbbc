use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::UniversidadModel;

pub struct UniversidadRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UniversidadRepository<'a, C> {
    /// Creates a new instance of [`UniversidadRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new university, returning the row with its generated ID
    pub async fn create(&self, nombre: String, pais: Option<i32>) -> Result<UniversidadModel, DbErr> {
        let universidad = entity::universidad::ActiveModel {
            nombre: ActiveValue::Set(nombre),
            pais: ActiveValue::Set(pais),
            ..Default::default()
        };

        universidad.insert(self.db).await
    }

    pub async fn get_by_id(&self, universidad_id: i32) -> Result<Option<UniversidadModel>, DbErr> {
        entity::prelude::Universidad::find_by_id(universidad_id)
            .one(self.db)
            .await
    }

    /// Gets every university ordered by ID
    pub async fn get_all(&self) -> Result<Vec<UniversidadModel>, DbErr> {
        entity::prelude::Universidad::find()
            .order_by_asc(entity::universidad::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets universities whose own `pais` column equals the provided country ID
    pub async fn get_many_by_pais(&self, pais_id: i32) -> Result<Vec<UniversidadModel>, DbErr> {
        entity::prelude::Universidad::find()
            .filter(entity::universidad::Column::Pais.eq(pais_id))
            .order_by_asc(entity::universidad::Column::Id)
            .all(self.db)
            .await
    }

    /// Renames a university
    ///
    /// # Returns
    /// - `Some(UniversidadModel)` if the update succeeded, `None` if the university was not found
    pub async fn update_nombre(
        &self,
        universidad_id: i32,
        nombre: String,
    ) -> Result<Option<UniversidadModel>, DbErr> {
        let Some(universidad) = self.get_by_id(universidad_id).await? else {
            return Ok(None);
        };

        let mut universidad_am = universidad.into_active_model();
        universidad_am.nombre = ActiveValue::Set(nombre);

        let universidad = universidad_am.update(self.db).await?;

        Ok(Some(universidad))
    }

    /// Deletes a university
    ///
    /// Returns OK regardless of the university existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, universidad_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Universidad::delete_by_id(universidad_id)
            .exec(self.db)
            .await
    }
}
