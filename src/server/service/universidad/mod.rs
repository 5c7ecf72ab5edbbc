//! University service layer.
//!
//! Lists, creates, edits and deletes universities together with their campuses.
//! Writes spanning more than one row run inside a single transaction.

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, HashMap};

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        geografia::{CiudadDto, ContinenteDto, PaisDto},
        universidad::{CampusSedeDto, EditUniversidadDto, UniversidadDto},
    },
    server::{
        data::{
            campus_sede::CampusSedeRepository,
            geografia::{
                ciudad::CiudadRepository, continente::ContinenteRepository, pais::PaisRepository,
            },
            universidad::UniversidadRepository,
        },
        error::{registry::RegistryError, Error},
        model::{
            db::{CampusSedeModel, ContinenteModel, UniversidadModel},
            registry::{NewUniversidad, UpdateUniversidad},
        },
        service::geografia::GeografiaService,
    },
};

pub struct UniversidadService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UniversidadService<'a> {
    /// Creates a new instance of [`UniversidadService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every university with its campuses and each campus city.
    ///
    /// Universities and campuses are both ordered by ID.
    pub async fn get_all_with_campus(&self) -> Result<Vec<UniversidadDto>, Error> {
        let universidades = UniversidadRepository::new(self.db).get_all().await?;

        self.attach_campus(universidades, true).await
    }

    /// Lists the universities whose `pais` column equals `pais_id`, with their campuses.
    ///
    /// An unknown country yields an empty list. Campus cities are not loaded.
    pub async fn get_by_pais(&self, pais_id: i32) -> Result<Vec<UniversidadDto>, Error> {
        let universidades = UniversidadRepository::new(self.db)
            .get_many_by_pais(pais_id)
            .await?;

        self.attach_campus(universidades, false).await
    }

    /// Creates a university and its first campus in one transaction.
    ///
    /// # Returns
    /// - `Ok((UniversidadModel, CampusSedeModel))` - Both rows were committed
    /// - `Err(Error::RegistryError(CiudadNotFound))` - The campus city does not exist, nothing written
    /// - `Err(Error::DbErr)` - Database operation failed, nothing written
    pub async fn create_with_campus(
        &self,
        nueva: NewUniversidad,
    ) -> Result<(UniversidadModel, CampusSedeModel), Error> {
        let txn = self.db.begin().await?;

        let ciudad_id = nueva.campus.ciudad;
        if CiudadRepository::new(&txn).get_by_id(ciudad_id).await?.is_none() {
            return Err(RegistryError::CiudadNotFound(ciudad_id).into());
        }

        let universidad = UniversidadRepository::new(&txn)
            .create(nueva.nombre, nueva.pais)
            .await?;
        let campus = CampusSedeRepository::new(&txn)
            .create(universidad.id, nueva.campus)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Created universidad {} ({}) with campus {}",
            universidad.id,
            universidad.nombre,
            campus.id
        );

        Ok((universidad, campus))
    }

    /// Loads a university for the edit form.
    ///
    /// Each campus carries its city, the city its country and the country its continent.
    /// The continent lookup used by the form's selection controls is included.
    ///
    /// # Returns
    /// - `Ok(EditUniversidadDto)` - University found
    /// - `Err(Error::RegistryError(UniversidadNotFound))` - No university with that ID
    pub async fn get_for_edit(&self, universidad_id: i32) -> Result<EditUniversidadDto, Error> {
        let universidad = UniversidadRepository::new(self.db)
            .get_by_id(universidad_id)
            .await?
            .ok_or(RegistryError::UniversidadNotFound(universidad_id))?;

        let campuses = CampusSedeRepository::new(self.db)
            .get_many_by_universidad_ids(&[universidad_id])
            .await?;

        let ciudad_ids = unique_ids(campuses.iter().map(|c| c.ciudad));
        let ciudades = CiudadRepository::new(self.db)
            .get_many_by_ids(&ciudad_ids)
            .await?;

        let pais_ids = unique_ids(ciudades.iter().map(|c| c.pais));
        let paises = PaisRepository::new(self.db)
            .get_many_by_ids(&pais_ids)
            .await?;

        let continente_ids = unique_ids(paises.iter().map(|p| p.continente));
        let continentes: HashMap<i32, ContinenteModel> = ContinenteRepository::new(self.db)
            .get_many_by_ids(&continente_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let paises: HashMap<i32, PaisDto> = paises
            .into_iter()
            .map(|p| {
                let continente_r = continentes
                    .get(&p.continente)
                    .cloned()
                    .map(ContinenteDto::from);
                let mut dto = PaisDto::from(p);
                dto.continente_r = continente_r;
                (dto.id, dto)
            })
            .collect();

        let ciudades: HashMap<i32, CiudadDto> = ciudades
            .into_iter()
            .map(|c| {
                let pais_r = paises.get(&c.pais).cloned();
                let mut dto = CiudadDto::from(c);
                dto.pais_r = pais_r;
                (dto.id, dto)
            })
            .collect();

        let campus_sedes = campuses
            .into_iter()
            .map(|campus| {
                let ciudad_r = ciudades.get(&campus.ciudad).cloned();
                let mut dto = CampusSedeDto::from(campus);
                dto.ciudad_r = ciudad_r;
                dto
            })
            .collect();

        let continentes: BTreeMap<i32, String> =
            GeografiaService::new(self.db).continentes_lookup().await?;

        Ok(EditUniversidadDto {
            id_universidad: universidad.id,
            info_universidad: UniversidadDto::with_campus(universidad, campus_sedes),
            continentes,
        })
    }

    /// Renames a university and overwrites every listed campus in one transaction.
    ///
    /// Any missing university, campus or city rolls back every write of the request.
    pub async fn update_with_campus(
        &self,
        update: UpdateUniversidad,
    ) -> Result<UniversidadModel, Error> {
        let txn = self.db.begin().await?;

        let universidad = UniversidadRepository::new(&txn)
            .update_nombre(update.universidad_id, update.nombre)
            .await?
            .ok_or(RegistryError::UniversidadNotFound(update.universidad_id))?;

        let ciudad_repo = CiudadRepository::new(&txn);
        let campus_repo = CampusSedeRepository::new(&txn);

        for campus in update.campuses {
            let ciudad_id = campus.fields.ciudad;
            if ciudad_repo.get_by_id(ciudad_id).await?.is_none() {
                return Err(RegistryError::CiudadNotFound(ciudad_id).into());
            }

            campus_repo
                .update(campus.campus_id, campus.fields)
                .await?
                .ok_or(RegistryError::CampusNotFound(campus.campus_id))?;
        }

        txn.commit().await?;

        tracing::info!("Updated universidad {} ({})", universidad.id, universidad.nombre);

        Ok(universidad)
    }

    /// Deletes a university that no longer owns any campus.
    ///
    /// The campus count and the delete share one transaction.
    ///
    /// # Returns
    /// - `Ok(UniversidadModel)` - The deleted row, used to name it in the response message
    /// - `Err(Error::RegistryError(UniversidadNotFound))` - No university with that ID
    /// - `Err(Error::RegistryError(UniversidadHasCampus))` - Campuses still reference it
    pub async fn delete(&self, universidad_id: i32) -> Result<UniversidadModel, Error> {
        let txn = self.db.begin().await?;
        let universidad_repo = UniversidadRepository::new(&txn);

        let universidad = universidad_repo
            .get_by_id(universidad_id)
            .await?
            .ok_or(RegistryError::UniversidadNotFound(universidad_id))?;

        let campus_count = CampusSedeRepository::new(&txn)
            .count_by_universidad(universidad_id)
            .await?;
        if campus_count > 0 {
            return Err(RegistryError::UniversidadHasCampus {
                id: universidad.id,
                nombre: universidad.nombre,
                campus_count,
            }
            .into());
        }

        let result = universidad_repo.delete(universidad_id).await?;
        if result.rows_affected == 0 {
            // Deleted by a concurrent request after the lookup above
            return Err(RegistryError::UniversidadNotFound(universidad_id).into());
        }

        txn.commit().await?;

        tracing::info!("Deleted universidad {} ({})", universidad.id, universidad.nombre);

        Ok(universidad)
    }

    /// Loads the campuses of the provided universities and nests them, optionally with
    /// each campus city.
    async fn attach_campus(
        &self,
        universidades: Vec<UniversidadModel>,
        with_ciudad: bool,
    ) -> Result<Vec<UniversidadDto>, Error> {
        let universidad_ids: Vec<i32> = universidades.iter().map(|u| u.id).collect();
        let campuses = CampusSedeRepository::new(self.db)
            .get_many_by_universidad_ids(&universidad_ids)
            .await?;

        let ciudades: HashMap<i32, CiudadDto> = if with_ciudad {
            let ciudad_ids = unique_ids(campuses.iter().map(|c| c.ciudad));
            CiudadRepository::new(self.db)
                .get_many_by_ids(&ciudad_ids)
                .await?
                .into_iter()
                .map(|c| (c.id, CiudadDto::from(c)))
                .collect()
        } else {
            HashMap::new()
        };

        let mut campus_by_universidad: HashMap<i32, Vec<CampusSedeDto>> = HashMap::new();
        for campus in campuses {
            let ciudad_r = ciudades.get(&campus.ciudad).cloned();
            let universidad_id = campus.universidad;
            let mut dto = CampusSedeDto::from(campus);
            dto.ciudad_r = ciudad_r;

            campus_by_universidad
                .entry(universidad_id)
                .or_default()
                .push(dto);
        }

        Ok(universidades
            .into_iter()
            .map(|universidad| {
                let campus_sedes = campus_by_universidad
                    .remove(&universidad.id)
                    .unwrap_or_default();
                UniversidadDto::with_campus(universidad, campus_sedes)
            })
            .collect())
    }
}

fn unique_ids(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    let mut ids: Vec<i32> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}
