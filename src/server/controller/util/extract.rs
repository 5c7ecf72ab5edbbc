//! Form and path extractors whose rejections answer with an [`ErrorDto`] body.
//!
//! They wrap axum's extractors of the same name and convert the rejection into
//! [`Error`], so a malformed form or path value gets the same JSON error shape as
//! every other failure.
//!
//! [`ErrorDto`]: crate::model::api::ErrorDto

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::Error;

/// `application/x-www-form-urlencoded` body
#[derive(FromRequest)]
#[from_request(via(axum::Form), rejection(Error))]
pub struct Form<T>(pub T);

/// Path parameters
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct Path<T>(pub T);
