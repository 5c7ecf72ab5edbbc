use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        universidad::{
            BuscarPorPaisDto, CreateUniversidadDto, CreateUniversidadLookupDto,
            EditUniversidadDto, IndexParams, UniversidadDto, UniversidadIndexDto,
            UniversidadListDto, UpdateUniversidadFormDto,
        },
    },
    server::{
        controller::util::{
            ajax::{message_response, require_ajax},
            extract::{Form, Path},
        },
        error::Error,
        model::{
            app::AppState,
            registry::{NewUniversidad, UpdateUniversidad},
        },
        service::{geografia::GeografiaService, universidad::UniversidadService},
    },
};

pub static UNIVERSIDAD_TAG: &str = "universidad";

pub static STORE_MESSAGE: &str = "se Guardó la universidad Correctamente";
pub static UPDATE_MESSAGE: &str = "la Universidad se actualizó correctamente";

/// Listing page data
///
/// Every university with its campuses, plus the `message` left by a redirected delete.
#[utoipa::path(
    get,
    path = "/universidades",
    tag = UNIVERSIDAD_TAG,
    params(IndexParams),
    responses(
        (status = 200, description = "Universities with their campuses", body = UniversidadIndexDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Result<impl IntoResponse, Error> {
    let data = UniversidadService::new(&state.db)
        .get_all_with_campus()
        .await?;

    Ok(Json(UniversidadIndexDto {
        message: params.message,
        data,
    }))
}

/// List every university with its campuses and each campus city
#[utoipa::path(
    get,
    path = "/universidades/universidad-campus",
    tag = UNIVERSIDAD_TAG,
    responses(
        (status = 200, description = "Universities with their campuses", body = UniversidadListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn universidad_campus(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let data = UniversidadService::new(&state.db)
        .get_all_with_campus()
        .await?;

    Ok(Json(UniversidadListDto { data }))
}

/// Filter universities by the country stored on the university
///
/// # Responses
/// - 200 (Success): Matching universities with their campuses, empty for an unknown or blank country
/// - 400 (Bad Request): Not an interactive request
#[utoipa::path(
    post,
    path = "/universidades/universidad-by-pais",
    tag = UNIVERSIDAD_TAG,
    request_body(content = BuscarPorPaisDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Universities of the country", body = Vec<UniversidadDto>),
        (status = 400, description = "Not an interactive request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn universidad_by_pais(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(payload): Form<BuscarPorPaisDto>,
) -> Result<impl IntoResponse, Error> {
    require_ajax(&headers)?;

    let universidades = match payload.id_buscar {
        Some(pais) => UniversidadService::new(&state.db).get_by_pais(pais).await?,
        None => Vec::new(),
    };

    Ok(Json(universidades))
}

/// Lookup data for the create form
#[utoipa::path(
    get,
    path = "/universidades/create",
    tag = UNIVERSIDAD_TAG,
    responses(
        (status = 200, description = "Continent names keyed by ID", body = CreateUniversidadLookupDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let continentes = GeografiaService::new(&state.db)
        .continentes_lookup()
        .await?;

    Ok(Json(CreateUniversidadLookupDto { continentes }))
}

/// Create a university together with its first campus
///
/// # Responses
/// - 200 (Success): Both rows were created
/// - 400 (Bad Request): Not an interactive request
/// - 422 (Unprocessable Entity): Blank university name or unknown city, nothing was written
#[utoipa::path(
    post,
    path = "/universidades/store",
    tag = UNIVERSIDAD_TAG,
    request_body(content = CreateUniversidadDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "University and campus created", body = MessageDto),
        (status = 400, description = "Not an interactive request", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn store(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(payload): Form<CreateUniversidadDto>,
) -> Result<impl IntoResponse, Error> {
    require_ajax(&headers)?;

    let nueva = NewUniversidad::try_from(payload)?;

    UniversidadService::new(&state.db)
        .create_with_campus(nueva)
        .await?;

    Ok(Json(MessageDto {
        message: STORE_MESSAGE.to_string(),
    }))
}

/// Load a university for editing, down to each campus continent
#[utoipa::path(
    get,
    path = "/universidades/edit/{id}",
    tag = UNIVERSIDAD_TAG,
    params(("id" = i32, Path, description = "University ID")),
    responses(
        (status = 200, description = "University with campuses and geography", body = EditUniversidadDto),
        (status = 404, description = "University not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit(
    State(state): State<AppState>,
    Path(universidad_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let edit = UniversidadService::new(&state.db)
        .get_for_edit(universidad_id)
        .await?;

    Ok(Json(edit))
}

/// Rename a university and overwrite its campuses in one transaction
///
/// `infoUniversidad` holds a JSON array; its first element carries `id_universidad` and
/// `nombre_universidad`, every element carries one campus.
///
/// # Responses
/// - 200 (Success): Every write was committed
/// - 400 (Bad Request): Not an interactive request, or `infoUniversidad` is not valid JSON
/// - 404 (Not Found): University or one of the campuses does not exist, nothing was written
/// - 422 (Unprocessable Entity): Empty array, missing university fields or unknown city
#[utoipa::path(
    post,
    path = "/universidades/update",
    tag = UNIVERSIDAD_TAG,
    request_body(content = UpdateUniversidadFormDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "University and campuses updated", body = MessageDto),
        (status = 400, description = "Not an interactive request or invalid payload", body = ErrorDto),
        (status = 404, description = "University or campus not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(payload): Form<UpdateUniversidadFormDto>,
) -> Result<impl IntoResponse, Error> {
    require_ajax(&headers)?;

    let update = UpdateUniversidad::from_json(&payload.info_universidad)?;

    UniversidadService::new(&state.db)
        .update_with_campus(update)
        .await?;

    Ok(Json(MessageDto {
        message: UPDATE_MESSAGE.to_string(),
    }))
}

/// Delete a university without campuses
///
/// # Responses
/// - 200 (Success): Interactive request, `{"message": ..}` naming the university
/// - 303 (See Other): Other requests are redirected to the listing with the message
/// - 404 (Not Found): University does not exist
/// - 409 (Conflict): University still owns campuses
#[utoipa::path(
    delete,
    path = "/universidades/destroy/{id}",
    tag = UNIVERSIDAD_TAG,
    params(("id" = i32, Path, description = "University ID")),
    responses(
        (status = 200, description = "University deleted", body = MessageDto),
        (status = 303, description = "University deleted, redirect to the listing"),
        (status = 404, description = "University not found", body = ErrorDto),
        (status = 409, description = "University still owns campuses", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn destroy(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(universidad_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let universidad = UniversidadService::new(&state.db)
        .delete(universidad_id)
        .await?;

    message_response(
        &headers,
        format!("La universidad {} Fue eliminado", universidad.nombre),
    )
}
