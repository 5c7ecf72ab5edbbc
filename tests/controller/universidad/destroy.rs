//! Tests for the destroy endpoint.

use axum::{
    extract::State,
    http::{header::LOCATION, HeaderMap, StatusCode},
    response::IntoResponse,
};
use ome::server::controller::{universidad::destroy, util::extract::Path};

use super::*;

/// Tests an interactive delete answers with a message naming the university.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn deletes_universidad_with_message() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let universidad = test.registry().insert_universidad("UACH", None).await?;

    let result = destroy(
        State(test.into_app_state()),
        ajax_headers(),
        Path(universidad.id),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await["message"],
        "La universidad UACH Fue eliminado"
    );

    Ok(())
}

/// Tests a non-interactive delete redirects to the listing carrying the message.
///
/// Expected: Ok with 303 SEE OTHER response
#[tokio::test]
async fn redirects_when_not_ajax() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let universidad = test.registry().insert_universidad("UACH", None).await?;

    let result = destroy(
        State(test.into_app_state()),
        HeaderMap::new(),
        Path(universidad.id),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(LOCATION).unwrap(),
        "/universidades?message=La+universidad+UACH+Fue+eliminado"
    );

    Ok(())
}

/// Tests a second delete of the same university is reported as not found.
///
/// Expected: Err with 404 NOT FOUND response
#[tokio::test]
async fn error_on_second_delete() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let universidad = test.registry().insert_universidad("UACH", None).await?;

    let first = destroy(
        State(test.into_app_state()),
        ajax_headers(),
        Path(universidad.id),
    )
    .await;
    assert!(first.is_ok());

    let second = destroy(
        State(test.into_app_state()),
        ajax_headers(),
        Path(universidad.id),
    )
    .await;

    let resp = second.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests a university that still owns campuses is kept.
///
/// Expected: Err with 409 CONFLICT response
#[tokio::test]
async fn error_when_universidad_has_campus() -> Result<(), TestError> {
    let test = test_setup_with_registry_tables!()?;
    let (universidad, _) = test
        .registry()
        .insert_universidad_with_campus("UACH", 1)
        .await?;

    let result = destroy(
        State(test.into_app_state()),
        ajax_headers(),
        Path(universidad.id),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
