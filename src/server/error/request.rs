use axum::{
    extract::rejection::{FormRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::Error as ServerError};

/// Body returned to write requests that were not sent as interactive requests.
pub static NO_AJAX: &str = "no ajax";

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Request is missing the `X-Requested-With: XMLHttpRequest` header")]
    NotAjax,
    #[error("Failed to decode request payload: {0}")]
    InvalidPayload(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    /// A form body or path parameter could not be extracted
    #[error("Failed to extract request: {message}")]
    Rejected { status: StatusCode, message: String },
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::debug!("Request error: {}", self);

        match self {
            Self::NotAjax => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: NO_AJAX.to_string(),
                }),
            )
                .into_response(),
            Self::InvalidPayload(reason) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: format!("Payload inválido: {}", reason),
                }),
            )
                .into_response(),
            Self::Validation(reason) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorDto { error: reason })).into_response()
            }
            Self::Rejected { status, message } => {
                (status, Json(ErrorDto { error: message })).into_response()
            }
        }
    }
}

impl From<FormRejection> for ServerError {
    fn from(rejection: FormRejection) -> Self {
        Self::RequestError(RequestError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        })
    }
}

impl From<PathRejection> for ServerError {
    fn from(rejection: PathRejection) -> Self {
        Self::RequestError(RequestError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        })
    }
}
