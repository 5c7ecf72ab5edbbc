//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, so these tests cover request
//! validation, response shape and status codes without going through the router.

mod campus;
mod geografia;
mod universidad;

use ome_test_utils::prelude::*;

use crate::util::{ajax_headers, body_json, TestContextExt};
