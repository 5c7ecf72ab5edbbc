//! Tests for university controller endpoints.

mod create;
mod destroy;
mod edit;
mod index;
mod store;
mod universidad_by_pais;
mod update;

use super::*;
