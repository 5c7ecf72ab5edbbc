use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::geografia::{CiudadDto, ContinenteDto, CreateContinenteDto, PaisDto},
    server::{
        data::geografia::{
            ciudad::CiudadRepository, continente::ContinenteRepository, pais::PaisRepository,
        },
        error::{request::RequestError, Error},
    },
};

/// Maximum length of a continent name, in characters
pub const CONTINENTE_NOMBRE_MAX_LEN: usize = 9;

pub struct GeografiaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GeografiaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Continent names keyed by ID
    pub async fn continentes_lookup(&self) -> Result<BTreeMap<i32, String>, Error> {
        let continentes = ContinenteRepository::new(self.db).get_all().await?;

        Ok(continentes.into_iter().map(|c| (c.id, c.nombre)).collect())
    }

    /// Creates a continent after checking its name is 1 to 9 characters long
    pub async fn create_continente(
        &self,
        payload: CreateContinenteDto,
    ) -> Result<ContinenteDto, Error> {
        let nombre = payload.nombre.trim();
        let len = nombre.chars().count();

        if len == 0 || len > CONTINENTE_NOMBRE_MAX_LEN {
            return Err(RequestError::Validation(format!(
                "el nombre del continente debe tener entre 1 y {} caracteres",
                CONTINENTE_NOMBRE_MAX_LEN
            ))
            .into());
        }

        let continente = ContinenteRepository::new(self.db)
            .create(nombre.to_string())
            .await?;

        tracing::info!("Created continente {} ({})", continente.id, continente.nombre);

        Ok(continente.into())
    }

    pub async fn paises_by_continente(&self, continente_id: i32) -> Result<Vec<PaisDto>, Error> {
        let paises = PaisRepository::new(self.db)
            .get_many_by_continente(continente_id)
            .await?;

        Ok(paises.into_iter().map(PaisDto::from).collect())
    }

    pub async fn ciudades_by_pais(&self, pais_id: i32) -> Result<Vec<CiudadDto>, Error> {
        let ciudades = CiudadRepository::new(self.db)
            .get_many_by_pais(pais_id)
            .await?;

        Ok(ciudades.into_iter().map(CiudadDto::from).collect())
    }
}
