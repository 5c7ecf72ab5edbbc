use sea_orm::DatabaseConnection;

use crate::{
    model::universidad::CampusSedeDto,
    server::{
        data::{
            campus_sede::CampusSedeRepository, geografia::ciudad::CiudadRepository,
            universidad::UniversidadRepository,
        },
        error::{registry::RegistryError, Error},
        model::{db::CampusSedeModel, registry::NewCampus},
    },
};

pub struct CampusSedeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CampusSedeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a campus to an existing university.
    ///
    /// # Returns
    /// - `Ok(Vec<CampusSedeDto>)` - Every campus of the university, newest first
    /// - `Err(Error::RegistryError(UniversidadNotFound))` - The university does not exist
    /// - `Err(Error::RegistryError(CiudadNotFound))` - The city does not exist
    pub async fn add_campus(&self, nuevo: NewCampus) -> Result<Vec<CampusSedeDto>, Error> {
        let universidad_id = nuevo.universidad;
        if UniversidadRepository::new(self.db)
            .get_by_id(universidad_id)
            .await?
            .is_none()
        {
            return Err(RegistryError::UniversidadNotFound(universidad_id).into());
        }

        let ciudad_id = nuevo.fields.ciudad;
        if CiudadRepository::new(self.db)
            .get_by_id(ciudad_id)
            .await?
            .is_none()
        {
            return Err(RegistryError::CiudadNotFound(ciudad_id).into());
        }

        let campus_repo = CampusSedeRepository::new(self.db);
        let campus = campus_repo.create(universidad_id, nuevo.fields).await?;

        tracing::info!(
            "Added campus {} ({}) to universidad {}",
            campus.id,
            campus.nombre,
            universidad_id
        );

        let campuses = campus_repo
            .get_many_by_universidad_newest_first(universidad_id)
            .await?;

        Ok(campuses.into_iter().map(CampusSedeDto::from).collect())
    }

    /// Deletes a campus, returning the deleted row
    pub async fn delete(&self, campus_id: i32) -> Result<CampusSedeModel, Error> {
        let campus_repo = CampusSedeRepository::new(self.db);

        let campus = campus_repo
            .get_by_id(campus_id)
            .await?
            .ok_or(RegistryError::CampusNotFound(campus_id))?;

        let result = campus_repo.delete(campus_id).await?;
        if result.rows_affected == 0 {
            return Err(RegistryError::CampusNotFound(campus_id).into());
        }

        tracing::info!("Deleted campus {} ({})", campus.id, campus.nombre);

        Ok(campus)
    }
}
