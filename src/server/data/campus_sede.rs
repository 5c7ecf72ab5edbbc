use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{db::CampusSedeModel, registry::CampusFields};

pub struct CampusSedeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CampusSedeRepository<'a, C> {
    /// Creates a new instance of [`CampusSedeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a campus for the provided university
    pub async fn create(
        &self,
        universidad_id: i32,
        fields: CampusFields,
    ) -> Result<CampusSedeModel, DbErr> {
        let campus = entity::campus_sede::ActiveModel {
            nombre: ActiveValue::Set(fields.nombre),
            telefono: ActiveValue::Set(fields.telefono),
            fax: ActiveValue::Set(fields.fax),
            sitio_web: ActiveValue::Set(fields.sitio_web),
            universidad: ActiveValue::Set(universidad_id),
            ciudad: ActiveValue::Set(fields.ciudad),
            ..Default::default()
        };

        campus.insert(self.db).await
    }

    pub async fn get_by_id(&self, campus_id: i32) -> Result<Option<CampusSedeModel>, DbErr> {
        entity::prelude::CampusSede::find_by_id(campus_id)
            .one(self.db)
            .await
    }

    /// Gets the campuses of every provided university, ordered by campus ID
    pub async fn get_many_by_universidad_ids(
        &self,
        universidad_ids: &[i32],
    ) -> Result<Vec<CampusSedeModel>, DbErr> {
        if universidad_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::CampusSede::find()
            .filter(entity::campus_sede::Column::Universidad.is_in(universidad_ids.to_vec()))
            .order_by_asc(entity::campus_sede::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the campuses of a university, most recently created first
    pub async fn get_many_by_universidad_newest_first(
        &self,
        universidad_id: i32,
    ) -> Result<Vec<CampusSedeModel>, DbErr> {
        entity::prelude::CampusSede::find()
            .filter(entity::campus_sede::Column::Universidad.eq(universidad_id))
            .order_by_desc(entity::campus_sede::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count_by_universidad(&self, universidad_id: i32) -> Result<u64, DbErr> {
        entity::prelude::CampusSede::find()
            .filter(entity::campus_sede::Column::Universidad.eq(universidad_id))
            .count(self.db)
            .await
    }

    /// Overwrites the mutable columns of a campus
    ///
    /// # Returns
    /// - `Some(CampusSedeModel)` if the update succeeded, `None` if the campus was not found
    pub async fn update(
        &self,
        campus_id: i32,
        fields: CampusFields,
    ) -> Result<Option<CampusSedeModel>, DbErr> {
        let Some(campus) = self.get_by_id(campus_id).await? else {
            return Ok(None);
        };

        let mut campus_am = campus.into_active_model();
        campus_am.nombre = ActiveValue::Set(fields.nombre);
        campus_am.telefono = ActiveValue::Set(fields.telefono);
        campus_am.fax = ActiveValue::Set(fields.fax);
        campus_am.sitio_web = ActiveValue::Set(fields.sitio_web);
        campus_am.ciudad = ActiveValue::Set(fields.ciudad);

        let campus = campus_am.update(self.db).await?;

        Ok(Some(campus))
    }

    /// Deletes a campus
    ///
    /// Returns OK regardless of the campus existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, campus_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::CampusSede::delete_by_id(campus_id)
            .exec(self.db)
            .await
    }
}
