use axum::{
    http::header::HeaderMap,
    response::{IntoResponse, Redirect, Response},
    Json,
};

use crate::{
    model::api::MessageDto,
    server::error::{request::RequestError, Error},
};

/// Header set by browsers' XMLHttpRequest wrappers on interactive requests
pub static X_REQUESTED_WITH: &str = "x-requested-with";
pub static XML_HTTP_REQUEST: &str = "XMLHttpRequest";

/// Page non-interactive deletes are redirected to, with the message in the query string
pub static INDEX_PATH: &str = "/universidades";

/// Whether the request was sent as an interactive request
pub fn is_ajax(headers: &HeaderMap) -> bool {
    headers
        .get(X_REQUESTED_WITH)
        .map(|value| value.as_bytes().eq_ignore_ascii_case(XML_HTTP_REQUEST.as_bytes()))
        .unwrap_or(false)
}

/// Rejects requests that were not sent as interactive requests
pub fn require_ajax(headers: &HeaderMap) -> Result<(), Error> {
    if is_ajax(headers) {
        return Ok(());
    }

    Err(Error::RequestError(RequestError::NotAjax))
}

/// Answers a write with `{"message": ..}` for interactive requests, otherwise redirects
/// to the listing page carrying the message in its `message` query parameter.
pub fn message_response(headers: &HeaderMap, message: String) -> Result<Response, Error> {
    if is_ajax(headers) {
        return Ok(Json(MessageDto { message }).into_response());
    }

    let query = serde_urlencoded::to_string([("message", message.as_str())])
        .map_err(|err| Error::InternalError(format!("Failed to encode redirect query: {}", err)))?;

    Ok(Redirect::to(&format!("{}?{}", INDEX_PATH, query)).into_response())
}
