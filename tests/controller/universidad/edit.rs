//! Tests for the edit endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use ome::server::controller::{universidad::edit, util::extract::Path};

use super::*;

/// Tests the university is returned with its campuses, geography and continent lookup.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn returns_universidad_for_edit() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let (universidad, campus) = test
        .registry()
        .insert_universidad_with_campus("UACH", 1)
        .await?;

    let result = edit(State(test.into_app_state()), Path(universidad.id)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["id_universidad"], universidad.id);
    let campus_json = &body["info_universidad"]["campus_sedes"][0];
    assert_eq!(campus_json["id"], campus.id);
    assert_eq!(
        campus_json["ciudad_r"]["pais_r"]["continente_r"]["nombre"],
        "Cont1"
    );
    assert_eq!(body["continentes"]["1"], "Cont1");

    Ok(())
}

/// Tests an unknown university is reported as not found.
///
/// Expected: Err with 404 NOT FOUND response
#[tokio::test]
async fn error_for_unknown_universidad() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;

    let result = edit(State(test.into_app_state()), Path(1)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
