//! Tests for the update endpoint.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use ome::{
    model::universidad::UpdateUniversidadFormDto,
    server::controller::{
        universidad::{update, UPDATE_MESSAGE},
        util::extract::Form,
    },
};

use super::*;

fn form(info_universidad: serde_json::Value) -> Form<UpdateUniversidadFormDto> {
    Form(UpdateUniversidadFormDto {
        info_universidad: info_universidad.to_string(),
    })
}

/// Tests the university and its campus are updated.
///
/// Expected: Ok with 200 OK response and the success message
#[tokio::test]
async fn updates_universidad() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let (universidad, campus) = test
        .registry()
        .insert_universidad_with_campus("UACH", 1)
        .await?;

    let payload = serde_json::json!([{
        "id_universidad": universidad.id,
        "nombre_universidad": "Universidad Austral",
        "id": campus.id,
        "nombre": "Isla Teja",
        "telefono": "632221277",
        "fax": null,
        "sitio_web": "https://www.uach.cl",
        "ciudad": 1
    }]);

    let result = update(State(test.into_app_state()), ajax_headers(), form(payload)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["message"], UPDATE_MESSAGE);

    Ok(())
}

/// Tests a payload that is not a JSON array is rejected.
///
/// Expected: Err with 400 BAD REQUEST response
#[tokio::test]
async fn error_for_invalid_json() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;

    let result = update(
        State(test.into_app_state()),
        ajax_headers(),
        Form(UpdateUniversidadFormDto {
            info_universidad: "{not json".to_string(),
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests an empty array is rejected before any write.
///
/// Expected: Err with 422 UNPROCESSABLE ENTITY response
#[tokio::test]
async fn error_for_empty_array() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;

    let result = update(
        State(test.into_app_state()),
        ajax_headers(),
        form(serde_json::json!([])),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Tests an unknown campus is reported as not found.
///
/// Expected: Err with 404 NOT FOUND response
#[tokio::test]
async fn error_for_unknown_campus() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let universidad = test.registry().insert_universidad("UACH", None).await?;

    let payload = serde_json::json!([{
        "id_universidad": universidad.id,
        "nombre_universidad": "UACH",
        "id": 404,
        "nombre": "Fantasma",
        "ciudad": 1
    }]);

    let result = update(State(test.into_app_state()), ajax_headers(), form(payload)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests requests without the interactive marker are rejected.
///
/// Expected: Err with 400 BAD REQUEST response
#[tokio::test]
async fn error_when_not_ajax() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;

    let result = update(
        State(test.into_app_state()),
        HeaderMap::new(),
        form(serde_json::json!([])),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["error"], "no ajax");

    Ok(())
}
