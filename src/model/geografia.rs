use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ContinenteDto {
    pub id: i32,
    pub nombre: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PaisDto {
    pub id: i32,
    pub nombre: String,
    pub continente: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continente_r: Option<ContinenteDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CiudadDto {
    pub id: i32,
    pub nombre: String,
    pub pais: i32,
    pub codigo_postal: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pais_r: Option<PaisDto>,
}

/// Form body for creating a continent
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateContinenteDto {
    pub nombre: String,
}
