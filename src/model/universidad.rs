use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};

use crate::model::geografia::CiudadDto;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CampusSedeDto {
    pub id: i32,
    pub nombre: String,
    pub telefono: Option<String>,
    pub fax: Option<String>,
    pub sitio_web: Option<String>,
    pub universidad: i32,
    pub ciudad: i32,
    /// The campus city, present when the endpoint loads it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ciudad_r: Option<CiudadDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UniversidadDto {
    pub id: i32,
    pub nombre: String,
    pub pais: Option<i32>,
    pub campus_sedes: Vec<CampusSedeDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UniversidadListDto {
    pub data: Vec<UniversidadDto>,
}

/// Listing page payload, `message` carries the notice of a redirected delete
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UniversidadIndexDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Vec<UniversidadDto>,
}

/// Continent names keyed by ID, used to fill selection controls
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUniversidadLookupDto {
    pub continentes: BTreeMap<i32, String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EditUniversidadDto {
    pub id_universidad: i32,
    pub info_universidad: UniversidadDto,
    pub continentes: BTreeMap<i32, String>,
}

/// Form body for creating a university together with its first campus
///
/// An empty `pais` from an unselected control is read as no country.
#[serde_as]
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUniversidadDto {
    pub nombre_universidad: String,
    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub pais: Option<i32>,
    pub nombre: String,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub fax: Option<String>,
    #[serde(default)]
    pub sitio_web: Option<String>,
    pub ciudad: i32,
}

/// Form body for adding a campus to an existing university
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateCampusDto {
    pub nombre: String,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub fax: Option<String>,
    #[serde(default)]
    pub sitio_web: Option<String>,
    pub universidad: i32,
    pub ciudad: i32,
}

/// Form body for filtering universities by country, an empty `idBuscar` matches nothing
#[serde_as]
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BuscarPorPaisDto {
    #[serde(rename = "idBuscar", default)]
    #[serde_as(as = "NoneAsEmptyString")]
    pub id_buscar: Option<i32>,
}

/// Form body of the bulk update, `infoUniversidad` is a JSON array of [`CampusUpdateEntryDto`]
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateUniversidadFormDto {
    #[serde(rename = "infoUniversidad")]
    pub info_universidad: String,
}

/// One element of the bulk update array.
///
/// Only the first element needs `id_universidad` and `nombre_universidad`.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CampusUpdateEntryDto {
    #[serde(default)]
    pub id_universidad: Option<i32>,
    #[serde(default)]
    pub nombre_universidad: Option<String>,
    pub id: i32,
    pub nombre: String,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub fax: Option<String>,
    #[serde(default)]
    pub sitio_web: Option<String>,
    pub ciudad: i32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IndexParams {
    /// Notice left by a redirected delete
    #[serde(default)]
    pub message: Option<String>,
}
