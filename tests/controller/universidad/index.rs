//! Tests for the index and universidad_campus endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use ome::{
    model::universidad::IndexParams,
    server::controller::universidad::{index, universidad_campus},
};

use super::*;

/// Tests the redirect message is echoed next to the listing.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn echoes_message_with_listing() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    test.registry()
        .insert_universidad_with_campus("UACH", 1)
        .await?;

    let params = IndexParams {
        message: Some("La universidad UdeC Fue eliminado".to_string()),
    };
    let result = index(State(test.into_app_state()), Query(params)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "La universidad UdeC Fue eliminado");
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    Ok(())
}

/// Tests the message key is omitted when there is no redirect message.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn omits_missing_message() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;

    let result = index(State(test.into_app_state()), Query(IndexParams::default())).await;

    let body = body_json(result.unwrap().into_response()).await;
    assert!(body.get("message").is_none());
    assert_eq!(body["data"], serde_json::json!([]));

    Ok(())
}

/// Tests each campus is listed with its city.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn lists_campus_with_ciudad() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let (universidad, campus) = test
        .registry()
        .insert_universidad_with_campus("UACH", 5)
        .await?;

    let result = universidad_campus(State(test.into_app_state())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], universidad.id);
    assert_eq!(data[0]["campus_sedes"][0]["id"], campus.id);
    assert_eq!(data[0]["campus_sedes"][0]["ciudad_r"]["id"], 5);

    Ok(())
}

/// Tests a database failure is reported as an internal error.
///
/// Expected: Err with 500 INTERNAL SERVER ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = universidad_campus(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
