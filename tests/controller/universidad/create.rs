//! Tests for the create form lookup endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use ome::server::controller::universidad::create;

use super::*;

/// Tests the create form receives the continent lookup.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn returns_continentes_lookup() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .with_mock_continente(1)
        .with_mock_continente(3)
        .build()
        .await?;

    let result = create(State(test.into_app_state())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "continentes": { "1": "Cont1", "3": "Cont3" } })
    );

    Ok(())
}
