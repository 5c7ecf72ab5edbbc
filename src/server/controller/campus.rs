use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        universidad::{CampusSedeDto, CreateCampusDto},
    },
    server::{
        controller::{
            universidad::UNIVERSIDAD_TAG,
            util::{
                ajax::{message_response, require_ajax},
                extract::{Form, Path},
            },
        },
        error::Error,
        model::{app::AppState, registry::NewCampus},
        service::campus_sede::CampusSedeService,
    },
};

/// Add a campus to an existing university
///
/// # Responses
/// - 200 (Success): Every campus of the university, newest first
/// - 400 (Bad Request): Not an interactive request
/// - 404 (Not Found): University does not exist
/// - 422 (Unprocessable Entity): City does not exist
#[utoipa::path(
    post,
    path = "/universidades/store-campus",
    tag = UNIVERSIDAD_TAG,
    request_body(content = CreateCampusDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Campuses of the university, newest first", body = Vec<CampusSedeDto>),
        (status = 400, description = "Not an interactive request", body = ErrorDto),
        (status = 404, description = "University not found", body = ErrorDto),
        (status = 422, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn store_campus(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(payload): Form<CreateCampusDto>,
) -> Result<impl IntoResponse, Error> {
    require_ajax(&headers)?;

    let campuses = CampusSedeService::new(&state.db)
        .add_campus(NewCampus::from(payload))
        .await?;

    Ok(Json(campuses))
}

/// Delete a campus
///
/// # Responses
/// - 200 (Success): Interactive request, `{"message": ..}` naming the campus
/// - 303 (See Other): Other requests are redirected to the listing with the message
/// - 404 (Not Found): Campus does not exist
#[utoipa::path(
    delete,
    path = "/universidades/destroy-campus/{id}",
    tag = UNIVERSIDAD_TAG,
    params(("id" = i32, Path, description = "Campus ID")),
    responses(
        (status = 200, description = "Campus deleted", body = MessageDto),
        (status = 303, description = "Campus deleted, redirect to the listing"),
        (status = 404, description = "Campus not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn destroy_campus(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(campus_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let campus = CampusSedeService::new(&state.db).delete(campus_id).await?;

    message_response(&headers, format!("El campus {} Fue eliminado", campus.nombre))
}
