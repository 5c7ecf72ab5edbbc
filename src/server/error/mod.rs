//! Error types for the OME server application.
//!
//! Errors are split by concern (configuration, request shape, registry lookups) and
//! aggregated into [`Error`]. Every error type implements `IntoResponse` so handlers can
//! return `Result<_, Error>` and let `?` pick the HTTP status.

pub mod config;
pub mod registry;
pub mod request;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, registry::RegistryError, request::RequestError},
};

/// Main error type for the OME server application.
///
/// Domain-specific errors and external library errors are converted into this type with
/// `?` through `thiserror`'s `#[from]`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// The request does not have the expected transport shape or fails validation.
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// A referenced registry record does not exist or blocks the operation.
    #[error(transparent)]
    RegistryError(#[from] RegistryError),
    /// Internal error indicating a bug in the server code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Request not flagged as interactive, or undecodable payload
/// - 404 Not Found - University or campus not found
/// - 409 Conflict - University still owns campuses
/// - 422 Unprocessable Entity - Validation failures and unknown referenced cities
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::RequestError(err) => err.into_response(),
            Self::RegistryError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
