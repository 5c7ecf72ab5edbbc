use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::registry::RegistryFixtures,
    model::{CampusSedeModel, UniversidadModel},
};

impl<'a> RegistryFixtures<'a> {
    /// Insert a university with the provided name and optional country ID.
    pub async fn insert_universidad(
        &self,
        nombre: &str,
        pais: Option<i32>,
    ) -> Result<UniversidadModel, TestError> {
        Ok(
            entity::prelude::Universidad::insert(entity::universidad::ActiveModel {
                nombre: ActiveValue::Set(nombre.to_string()),
                pais: ActiveValue::Set(pais),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a campus for an existing university and city.
    ///
    /// Phone, fax and website are filled with test values.
    pub async fn insert_campus(
        &self,
        universidad_id: i32,
        ciudad_id: i32,
        nombre: &str,
    ) -> Result<CampusSedeModel, TestError> {
        Ok(
            entity::prelude::CampusSede::insert(entity::campus_sede::ActiveModel {
                nombre: ActiveValue::Set(nombre.to_string()),
                telefono: ActiveValue::Set(Some("632221277".to_string())),
                fax: ActiveValue::Set(None),
                sitio_web: ActiveValue::Set(Some("https://www.uach.cl".to_string())),
                universidad: ActiveValue::Set(universidad_id),
                ciudad: ActiveValue::Set(ciudad_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a university together with one campus named `Campus {nombre}`.
    ///
    /// The city is created through the geography fixtures if it doesn't exist.
    pub async fn insert_universidad_with_campus(
        &self,
        nombre: &str,
        ciudad_id: i32,
    ) -> Result<(UniversidadModel, CampusSedeModel), TestError> {
        let ciudad = self
            .setup
            .geografia()
            .insert_mock_ciudad(ciudad_id, 1)
            .await?;

        let universidad = self.insert_universidad(nombre, None).await?;
        let campus = self
            .insert_campus(universidad.id, ciudad.id, &format!("Campus {}", nombre))
            .await?;

        Ok((universidad, campus))
    }
}
