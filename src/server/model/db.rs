//! Database model type aliases.
//!
//! Short names for the SeaORM entity models used throughout the server, so signatures
//! don't need to spell out the generated `entity` crate paths. Conversions from these
//! models into the API DTOs live here as well.

use crate::model::{
    geografia::{CiudadDto, ContinenteDto, PaisDto},
    universidad::{CampusSedeDto, UniversidadDto},
};

/// Type alias for continent database model.
///
/// # Fields (from `entity::continente::Model`)
/// - `id` - Primary key
/// - `nombre` - Continent name, at most 9 characters
pub type ContinenteModel = entity::continente::Model;

/// Type alias for country database model.
///
/// # Fields (from `entity::pais::Model`)
/// - `id` - Primary key
/// - `nombre` - Country name
/// - `continente` - Foreign key to the continent
pub type PaisModel = entity::pais::Model;

/// Type alias for city database model.
///
/// # Fields (from `entity::ciudad::Model`)
/// - `id` - Primary key
/// - `nombre` - City name
/// - `pais` - Country ID, not enforced by a foreign key
/// - `codigo_postal` - Postal code
pub type CiudadModel = entity::ciudad::Model;

/// Type alias for university database model.
///
/// # Fields (from `entity::universidad::Model`)
/// - `id` - Primary key
/// - `nombre` - University name
/// - `pais` - Country ID read by the country filter (nullable)
pub type UniversidadModel = entity::universidad::Model;

/// Type alias for campus database model.
///
/// # Fields (from `entity::campus_sede::Model`)
/// - `id` - Primary key
/// - `nombre` - Campus name
/// - `telefono`, `fax`, `sitio_web` - Optional contact details
/// - `universidad` - Foreign key to the owning university
/// - `ciudad` - Foreign key to the campus city
pub type CampusSedeModel = entity::campus_sede::Model;

impl From<ContinenteModel> for ContinenteDto {
    fn from(continente: ContinenteModel) -> Self {
        Self {
            id: continente.id,
            nombre: continente.nombre,
        }
    }
}

impl From<PaisModel> for PaisDto {
    fn from(pais: PaisModel) -> Self {
        Self {
            id: pais.id,
            nombre: pais.nombre,
            continente: pais.continente,
            continente_r: None,
        }
    }
}

impl From<CiudadModel> for CiudadDto {
    fn from(ciudad: CiudadModel) -> Self {
        Self {
            id: ciudad.id,
            nombre: ciudad.nombre,
            pais: ciudad.pais,
            codigo_postal: ciudad.codigo_postal,
            pais_r: None,
        }
    }
}

impl From<CampusSedeModel> for CampusSedeDto {
    fn from(campus: CampusSedeModel) -> Self {
        Self {
            id: campus.id,
            nombre: campus.nombre,
            telefono: campus.telefono,
            fax: campus.fax,
            sitio_web: campus.sitio_web,
            universidad: campus.universidad,
            ciudad: campus.ciudad,
            ciudad_r: None,
        }
    }
}

impl UniversidadDto {
    /// Builds the DTO of a university with the campuses already mapped
    pub fn with_campus(universidad: UniversidadModel, campus_sedes: Vec<CampusSedeDto>) -> Self {
        Self {
            id: universidad.id,
            nombre: universidad.nombre,
            pais: universidad.pais,
            campus_sedes,
        }
    }
}
