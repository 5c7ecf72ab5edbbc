//! HTTP controller endpoints for the OME registry API.
//!
//! Axum handlers check the interactive request marker on writes, call one service
//! operation and answer with JSON or a redirect. Each handler carries its OpenAPI
//! description through utoipa.

pub mod campus;
pub mod geografia;
pub mod universidad;
pub mod util;
