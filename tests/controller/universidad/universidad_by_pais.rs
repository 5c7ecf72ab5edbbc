//! Tests for the universidad_by_pais endpoint.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use ome::{
    model::universidad::BuscarPorPaisDto,
    server::controller::{universidad::universidad_by_pais, util::extract::Form},
};

use super::*;

/// Tests only the universities of the requested country are returned.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn returns_universidades_of_pais() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let chile = test.registry().insert_universidad("UACH", Some(56)).await?;
    test.registry().insert_universidad("UBA", Some(54)).await?;

    let result = universidad_by_pais(
        State(test.into_app_state()),
        ajax_headers(),
        Form(BuscarPorPaisDto { id_buscar: Some(56) }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let found = body.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["id"], chile.id);

    Ok(())
}

/// Tests an unknown country yields an empty array.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn returns_empty_for_unknown_pais() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;

    let result = universidad_by_pais(
        State(test.into_app_state()),
        ajax_headers(),
        Form(BuscarPorPaisDto { id_buscar: Some(999) }),
    )
    .await;

    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body, serde_json::json!([]));

    Ok(())
}

/// Tests requests without the interactive marker are rejected.
///
/// Expected: Err with 400 BAD REQUEST response
#[tokio::test]
async fn error_when_not_ajax() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;

    let result = universidad_by_pais(
        State(test.into_app_state()),
        HeaderMap::new(),
        Form(BuscarPorPaisDto { id_buscar: Some(56) }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
