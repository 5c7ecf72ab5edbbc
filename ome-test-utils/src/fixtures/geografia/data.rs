//! Geography database insertion utilities.
//!
//! Each insert is idempotent on the given ID and creates missing parents so that
//! foreign keys hold.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::geografia::GeografiaFixtures,
    model::{CiudadModel, ContinenteModel, PaisModel},
};

/// Continent used when a country is created implicitly for a city.
pub const DEFAULT_CONTINENTE_ID: i32 = 1;

impl<'a> GeografiaFixtures<'a> {
    /// Insert a mock continent named `Cont{id}`, or return the existing one.
    pub async fn insert_mock_continente(
        &self,
        continente_id: i32,
    ) -> Result<ContinenteModel, TestError> {
        if let Some(existing) = entity::prelude::Continente::find_by_id(continente_id)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        Ok(
            entity::prelude::Continente::insert(entity::continente::ActiveModel {
                id: ActiveValue::Set(continente_id),
                nombre: ActiveValue::Set(format!("Cont{}", continente_id)),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock country, creating its continent if it doesn't exist.
    pub async fn insert_mock_pais(
        &self,
        pais_id: i32,
        continente_id: i32,
    ) -> Result<PaisModel, TestError> {
        if let Some(existing) = entity::prelude::Pais::find_by_id(pais_id)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        self.insert_mock_continente(continente_id).await?;

        Ok(entity::prelude::Pais::insert(entity::pais::ActiveModel {
            id: ActiveValue::Set(pais_id),
            nombre: ActiveValue::Set(format!("Pais {}", pais_id)),
            continente: ActiveValue::Set(continente_id),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a mock city, creating its country on [`DEFAULT_CONTINENTE_ID`] if missing.
    pub async fn insert_mock_ciudad(
        &self,
        ciudad_id: i32,
        pais_id: i32,
    ) -> Result<CiudadModel, TestError> {
        if let Some(existing) = entity::prelude::Ciudad::find_by_id(ciudad_id)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        self.insert_mock_pais(pais_id, DEFAULT_CONTINENTE_ID).await?;

        Ok(entity::prelude::Ciudad::insert(entity::ciudad::ActiveModel {
            id: ActiveValue::Set(ciudad_id),
            nombre: ActiveValue::Set(format!("Ciudad {}", ciudad_id)),
            pais: ActiveValue::Set(pais_id),
            codigo_postal: ActiveValue::Set(format!("{:07}", ciudad_id)),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
