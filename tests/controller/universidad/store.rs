//! Tests for the store endpoint.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use ome::{
    model::universidad::CreateUniversidadDto,
    server::controller::{
        universidad::{store, STORE_MESSAGE},
        util::extract::Form,
    },
};

use super::*;

fn payload(nombre_universidad: &str, ciudad: i32) -> CreateUniversidadDto {
    CreateUniversidadDto {
        nombre_universidad: nombre_universidad.to_string(),
        pais: None,
        nombre: "Campus Central".to_string(),
        telefono: Some("123".to_string()),
        fax: None,
        sitio_web: None,
        ciudad,
    }
}

/// Tests a university and its first campus are created.
///
/// Expected: Ok with 200 OK response and the success message
#[tokio::test]
async fn creates_universidad_with_campus() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .with_mock_ciudad(5, 1)
        .build()
        .await?;

    let result = store(
        State(test.into_app_state()),
        ajax_headers(),
        Form(payload("UACH", 5)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["message"], STORE_MESSAGE);

    Ok(())
}

/// Tests requests without the interactive marker are rejected.
///
/// Expected: Err with 400 BAD REQUEST response
#[tokio::test]
async fn error_when_not_ajax() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .with_mock_ciudad(5, 1)
        .build()
        .await?;

    let result = store(
        State(test.into_app_state()),
        HeaderMap::new(),
        Form(payload("UACH", 5)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["error"], "no ajax");

    Ok(())
}

/// Tests a blank university name is rejected.
///
/// Expected: Err with 422 UNPROCESSABLE ENTITY response
#[tokio::test]
async fn error_for_blank_nombre() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .with_mock_ciudad(5, 1)
        .build()
        .await?;

    let result = store(
        State(test.into_app_state()),
        ajax_headers(),
        Form(payload("  ", 5)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Tests an unknown city is rejected without writing the university.
///
/// Expected: Err with 422 UNPROCESSABLE ENTITY response
#[tokio::test]
async fn error_for_unknown_ciudad() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;

    let result = store(
        State(test.into_app_state()),
        ajax_headers(),
        Form(payload("UACH", 5)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}
