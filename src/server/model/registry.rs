//! Validated write commands for the university registry.
//!
//! Form and JSON bodies are decoded into the DTOs of [`crate::model::universidad`] and
//! converted here into commands the services execute. Conversion is where validation
//! happens, so a command that exists is safe to write.

use crate::{
    model::universidad::{CampusUpdateEntryDto, CreateCampusDto, CreateUniversidadDto},
    server::error::request::RequestError,
};

/// Mutable campus columns shared by inserts and updates
#[derive(Clone, Debug, PartialEq)]
pub struct CampusFields {
    pub nombre: String,
    pub telefono: Option<String>,
    pub fax: Option<String>,
    pub sitio_web: Option<String>,
    pub ciudad: i32,
}

impl CampusFields {
    fn new(
        nombre: String,
        telefono: Option<String>,
        fax: Option<String>,
        sitio_web: Option<String>,
        ciudad: i32,
    ) -> Self {
        Self {
            nombre: nombre.trim().to_string(),
            telefono: blank_to_none(telefono),
            fax: blank_to_none(fax),
            sitio_web: blank_to_none(sitio_web),
            ciudad,
        }
    }
}

/// A university and its first campus, created in one transaction
#[derive(Clone, Debug, PartialEq)]
pub struct NewUniversidad {
    pub nombre: String,
    pub pais: Option<i32>,
    pub campus: CampusFields,
}

impl TryFrom<CreateUniversidadDto> for NewUniversidad {
    type Error = RequestError;

    fn try_from(dto: CreateUniversidadDto) -> Result<Self, Self::Error> {
        Ok(Self {
            nombre: required_nombre(&dto.nombre_universidad, "nombre_universidad")?,
            pais: dto.pais,
            campus: CampusFields::new(dto.nombre, dto.telefono, dto.fax, dto.sitio_web, dto.ciudad),
        })
    }
}

/// A campus added to an existing university
#[derive(Clone, Debug, PartialEq)]
pub struct NewCampus {
    pub universidad: i32,
    pub fields: CampusFields,
}

impl From<CreateCampusDto> for NewCampus {
    fn from(dto: CreateCampusDto) -> Self {
        Self {
            universidad: dto.universidad,
            fields: CampusFields::new(dto.nombre, dto.telefono, dto.fax, dto.sitio_web, dto.ciudad),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CampusUpdate {
    pub campus_id: i32,
    pub fields: CampusFields,
}

/// Bulk update of a university name and the listed campuses
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateUniversidad {
    pub universidad_id: i32,
    pub nombre: String,
    pub campuses: Vec<CampusUpdate>,
}

impl UpdateUniversidad {
    /// Decodes and validates the `infoUniversidad` JSON array.
    pub fn from_json(payload: &str) -> Result<Self, RequestError> {
        let entries: Vec<CampusUpdateEntryDto> = serde_json::from_str(payload)
            .map_err(|err| RequestError::InvalidPayload(err.to_string()))?;

        Self::try_from(entries)
    }
}

impl TryFrom<Vec<CampusUpdateEntryDto>> for UpdateUniversidad {
    type Error = RequestError;

    fn try_from(entries: Vec<CampusUpdateEntryDto>) -> Result<Self, Self::Error> {
        let Some(first) = entries.first() else {
            return Err(RequestError::Validation(
                "infoUniversidad debe contener al menos un campus".to_string(),
            ));
        };

        let universidad_id = first.id_universidad.ok_or_else(|| {
            RequestError::Validation("falta id_universidad en el primer elemento".to_string())
        })?;
        let nombre = required_nombre(
            first.nombre_universidad.as_deref().unwrap_or_default(),
            "nombre_universidad",
        )?;

        let campuses = entries
            .into_iter()
            .map(|entry| CampusUpdate {
                campus_id: entry.id,
                fields: CampusFields::new(
                    entry.nombre,
                    entry.telefono,
                    entry.fax,
                    entry.sitio_web,
                    entry.ciudad,
                ),
            })
            .collect();

        Ok(Self {
            universidad_id,
            nombre,
            campuses,
        })
    }
}

fn required_nombre(value: &str, field: &str) -> Result<String, RequestError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(RequestError::Validation(format!(
            "el campo {} es obligatorio",
            field
        )));
    }

    Ok(value.to_string())
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
