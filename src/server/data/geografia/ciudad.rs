use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::CiudadModel;

/// City row to be inserted, the ID is assigned by the database
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCiudad {
    pub nombre: String,
    pub pais: i32,
    pub codigo_postal: String,
}

pub struct CiudadRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CiudadRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts many cities in a single statement
    ///
    /// Returns the inserted rows, an empty input inserts nothing.
    pub async fn create_many(&self, ciudades: Vec<NewCiudad>) -> Result<Vec<CiudadModel>, DbErr> {
        if ciudades.is_empty() {
            return Ok(Vec::new());
        }

        let ciudades = ciudades
            .into_iter()
            .map(|c| entity::ciudad::ActiveModel {
                nombre: ActiveValue::Set(c.nombre),
                pais: ActiveValue::Set(c.pais),
                codigo_postal: ActiveValue::Set(c.codigo_postal),
                ..Default::default()
            });

        entity::prelude::Ciudad::insert_many(ciudades)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_by_id(&self, ciudad_id: i32) -> Result<Option<CiudadModel>, DbErr> {
        entity::prelude::Ciudad::find_by_id(ciudad_id)
            .one(self.db)
            .await
    }

    pub async fn get_many_by_ids(&self, ids: &[i32]) -> Result<Vec<CiudadModel>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Ciudad::find()
            .filter(entity::ciudad::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Gets the cities of a country ordered by ID
    pub async fn get_many_by_pais(&self, pais_id: i32) -> Result<Vec<CiudadModel>, DbErr> {
        entity::prelude::Ciudad::find()
            .filter(entity::ciudad::Column::Pais.eq(pais_id))
            .order_by_asc(entity::ciudad::Column::Id)
            .all(self.db)
            .await
    }
}
