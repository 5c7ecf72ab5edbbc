//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module registers every registry endpoint together with its OpenAPI description
//! and serves Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /universidades` - Listing page data with the optional redirect message
/// - `GET /universidades/universidad-campus` - Universities with campuses and cities
/// - `POST /universidades/universidad-by-pais` - Filter universities by country
/// - `GET /universidades/create` - Continent lookup for the create form
/// - `POST /universidades/store` - Create a university and its first campus
/// - `POST /universidades/store-campus` - Add a campus to a university
/// - `GET /universidades/edit/{id}` - University with its geography for editing
/// - `POST /universidades/update` - Bulk update of a university and its campuses
/// - `DELETE /universidades/destroy/{id}` - Delete a university
/// - `DELETE /universidades/destroy-campus/{id}` - Delete a campus
/// - `GET /continentes`, `POST /continentes/store` - Continent lookup and creation
/// - `GET /paises/by-continente/{id}` - Countries of a continent
/// - `GET /ciudades/by-pais/{id}` - Cities of a country
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "OME", description = "OME university registry API"), tags(
        (name = controller::universidad::UNIVERSIDAD_TAG, description = "University and campus routes"),
        (name = controller::geografia::GEOGRAFIA_TAG, description = "Continent, country and city lookups"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::universidad::index))
        .routes(routes!(controller::universidad::universidad_campus))
        .routes(routes!(controller::universidad::universidad_by_pais))
        .routes(routes!(controller::universidad::create))
        .routes(routes!(controller::universidad::store))
        .routes(routes!(controller::campus::store_campus))
        .routes(routes!(controller::universidad::edit))
        .routes(routes!(controller::universidad::update))
        .routes(routes!(controller::universidad::destroy))
        .routes(routes!(controller::campus::destroy_campus))
        .routes(routes!(controller::geografia::continentes))
        .routes(routes!(controller::geografia::store_continente))
        .routes(routes!(controller::geografia::paises_by_continente))
        .routes(routes!(controller::geografia::ciudades_by_pais))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
