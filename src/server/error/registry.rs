use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Universidad ID {0} not found")]
    UniversidadNotFound(i32),
    #[error("CampusSede ID {0} not found")]
    CampusNotFound(i32),
    #[error("Ciudad ID {0} referenced by a campus does not exist")]
    CiudadNotFound(i32),
    #[error("Universidad ID {id} ({nombre}) still owns {campus_count} campus and cannot be deleted")]
    UniversidadHasCampus {
        id: i32,
        nombre: String,
        campus_count: u64,
    },
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        tracing::debug!("Registry error: {}", self);

        let (status, error) = match &self {
            Self::UniversidadNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("No se encontró la universidad {}", id),
            ),
            Self::CampusNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("No se encontró el campus {}", id),
            ),
            Self::CiudadNotFound(id) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("La ciudad {} no existe", id),
            ),
            Self::UniversidadHasCampus { nombre, .. } => (
                StatusCode::CONFLICT,
                format!(
                    "La universidad {} tiene campus asociados, elimínelos primero",
                    nombre
                ),
            ),
        };

        (status, Json(ErrorDto { error })).into_response()
    }
}
