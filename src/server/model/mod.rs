//! Server application models and type definitions.
//!
//! Application state, database model type aliases and the validated write commands
//! that bridge HTTP request bodies and the service layer.

pub mod app;
pub mod db;
pub mod registry;
