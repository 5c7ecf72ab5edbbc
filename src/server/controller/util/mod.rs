//! Utility functions for controller request handling.
//!
//! This module provides the interactive request check shared by the write endpoints,
//! the JSON-or-redirect response used by deletes and the extractors that report
//! malformed requests as JSON errors.

pub mod ajax;
pub mod extract;
