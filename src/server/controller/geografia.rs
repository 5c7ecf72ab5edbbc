use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        geografia::{CiudadDto, ContinenteDto, CreateContinenteDto, PaisDto},
    },
    server::{
        controller::util::{
            ajax::require_ajax,
            extract::{Form, Path},
        },
        error::Error,
        model::app::AppState,
        service::geografia::GeografiaService,
    },
};

pub static GEOGRAFIA_TAG: &str = "geografia";

/// Continent names keyed by ID
#[utoipa::path(
    get,
    path = "/continentes",
    tag = GEOGRAFIA_TAG,
    responses(
        (status = 200, description = "Continent names keyed by ID", body = std::collections::BTreeMap<i32, String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn continentes(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let continentes = GeografiaService::new(&state.db)
        .continentes_lookup()
        .await?;

    Ok(Json(continentes))
}

/// Create a continent
///
/// # Responses
/// - 201 (Created): The new continent
/// - 400 (Bad Request): Not an interactive request
/// - 422 (Unprocessable Entity): Name is blank or longer than 9 characters
#[utoipa::path(
    post,
    path = "/continentes/store",
    tag = GEOGRAFIA_TAG,
    request_body(content = CreateContinenteDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Continent created", body = ContinenteDto),
        (status = 400, description = "Not an interactive request", body = ErrorDto),
        (status = 422, description = "Invalid continent name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn store_continente(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(payload): Form<CreateContinenteDto>,
) -> Result<impl IntoResponse, Error> {
    require_ajax(&headers)?;

    let continente = GeografiaService::new(&state.db)
        .create_continente(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(continente)))
}

/// Countries of a continent
#[utoipa::path(
    get,
    path = "/paises/by-continente/{id}",
    tag = GEOGRAFIA_TAG,
    params(("id" = i32, Path, description = "Continent ID")),
    responses(
        (status = 200, description = "Countries of the continent", body = Vec<PaisDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn paises_by_continente(
    State(state): State<AppState>,
    Path(continente_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let paises = GeografiaService::new(&state.db)
        .paises_by_continente(continente_id)
        .await?;

    Ok(Json(paises))
}

/// Cities of a country
#[utoipa::path(
    get,
    path = "/ciudades/by-pais/{id}",
    tag = GEOGRAFIA_TAG,
    params(("id" = i32, Path, description = "Country ID")),
    responses(
        (status = 200, description = "Cities of the country", body = Vec<CiudadDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn ciudades_by_pais(
    State(state): State<AppState>,
    Path(pais_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let ciudades = GeografiaService::new(&state.db)
        .ciudades_by_pais(pais_id)
        .await?;

    Ok(Json(ciudades))
}
