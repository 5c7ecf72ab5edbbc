//! Tests for geography controller endpoints.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use ome::{
    model::geografia::CreateContinenteDto,
    server::controller::{
        geografia::{ciudades_by_pais, continentes, paises_by_continente, store_continente},
        util::extract::{Form, Path},
    },
};

use super::*;

/// Tests the continent lookup is keyed by ID.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn continentes_returns_lookup() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .with_mock_continente(1)
        .with_mock_continente(2)
        .build()
        .await?;

    let result = continentes(State(test.into_app_state())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "1": "Cont1", "2": "Cont2" })
    );

    Ok(())
}

/// Tests a continent is created.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn store_continente_creates() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;

    let result = store_continente(
        State(test.into_app_state()),
        ajax_headers(),
        Form(CreateContinenteDto {
            nombre: "Europa".to_string(),
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["nombre"], "Europa");

    Ok(())
}

/// Tests a continent name longer than nine characters is rejected.
///
/// Expected: Err with 422 UNPROCESSABLE ENTITY response
#[tokio::test]
async fn store_continente_error_for_long_nombre() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;

    let result = store_continente(
        State(test.into_app_state()),
        ajax_headers(),
        Form(CreateContinenteDto {
            nombre: "Norteamérica".to_string(),
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Tests requests without the interactive marker are rejected.
///
/// Expected: Err with 400 BAD REQUEST response
#[tokio::test]
async fn store_continente_error_when_not_ajax() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;

    let result = store_continente(
        State(test.into_app_state()),
        HeaderMap::new(),
        Form(CreateContinenteDto {
            nombre: "Europa".to_string(),
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests countries and cities are listed by their parent.
///
/// Expected: Ok with 200 OK responses
#[tokio::test]
async fn lists_paises_and_ciudades() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .with_mock_pais(10, 1)
        .with_mock_ciudad(100, 10)
        .with_mock_ciudad(101, 10)
        .build()
        .await?;

    let result = paises_by_continente(State(test.into_app_state()), Path(1)).await;
    let paises = body_json(result.unwrap().into_response()).await;
    assert_eq!(paises.as_array().unwrap().len(), 1);
    assert_eq!(paises[0]["id"], 10);

    let result = ciudades_by_pais(State(test.into_app_state()), Path(10)).await;
    let ciudades = body_json(result.unwrap().into_response()).await;
    assert_eq!(ciudades.as_array().unwrap().len(), 2);
    assert_eq!(ciudades[0]["codigo_postal"], "0000100");

    Ok(())
}
