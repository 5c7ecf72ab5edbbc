//! Tests for campus controller endpoints.

use axum::{
    extract::State,
    http::{header::LOCATION, HeaderMap, StatusCode},
    response::IntoResponse,
};
use ome::{
    model::universidad::CreateCampusDto,
    server::controller::{
        campus::{destroy_campus, store_campus},
        util::extract::{Form, Path},
    },
};

use super::*;

fn payload(universidad: i32, ciudad: i32) -> CreateCampusDto {
    CreateCampusDto {
        nombre: "Miraflores".to_string(),
        telefono: None,
        fax: Some("".to_string()),
        sitio_web: None,
        universidad,
        ciudad,
    }
}

/// Tests the campus is added and the university's campuses are returned newest first.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn store_returns_campuses_newest_first() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let (universidad, existing) = test
        .registry()
        .insert_universidad_with_campus("UACH", 1)
        .await?;

    let result = store_campus(
        State(test.into_app_state()),
        ajax_headers(),
        Form(payload(universidad.id, 1)),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let campuses = body.as_array().unwrap();
    assert_eq!(campuses.len(), 2);
    assert_eq!(campuses[0]["nombre"], "Miraflores");
    assert_eq!(campuses[0]["fax"], serde_json::Value::Null);
    assert_eq!(campuses[1]["id"], existing.id);

    Ok(())
}

/// Tests a campus for an unknown university is rejected.
///
/// Expected: Err with 404 NOT FOUND response
#[tokio::test]
async fn store_error_for_unknown_universidad() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .with_mock_ciudad(1, 1)
        .build()
        .await?;

    let result = store_campus(
        State(test.into_app_state()),
        ajax_headers(),
        Form(payload(12, 1)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests requests without the interactive marker are rejected.
///
/// Expected: Err with 400 BAD REQUEST response
#[tokio::test]
async fn store_error_when_not_ajax() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let universidad = test.registry().insert_universidad("UACH", None).await?;

    let result = store_campus(
        State(test.into_app_state()),
        HeaderMap::new(),
        Form(payload(universidad.id, 1)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests an interactive delete answers with a message naming the campus.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn destroy_returns_message() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let (_, campus) = test
        .registry()
        .insert_universidad_with_campus("UACH", 1)
        .await?;

    let result = destroy_campus(State(test.into_app_state()), ajax_headers(), Path(campus.id)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await["message"],
        "El campus Campus UACH Fue eliminado"
    );

    Ok(())
}

/// Tests a non-interactive delete redirects to the listing.
///
/// Expected: Ok with 303 SEE OTHER response
#[tokio::test]
async fn destroy_redirects_when_not_ajax() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let (_, campus) = test
        .registry()
        .insert_universidad_with_campus("UACH", 1)
        .await?;

    let result = destroy_campus(State(test.into_app_state()), HeaderMap::new(), Path(campus.id)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(LOCATION).unwrap(),
        "/universidades?message=El+campus+Campus+UACH+Fue+eliminado"
    );

    Ok(())
}

/// Tests an unknown campus is reported as not found.
///
/// Expected: Err with 404 NOT FOUND response
#[tokio::test]
async fn destroy_error_for_unknown_campus() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;

    let result = destroy_campus(State(test.into_app_state()), ajax_headers(), Path(3)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
