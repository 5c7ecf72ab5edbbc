//! Server application core modules.
//!
//! This module contains all server-side functionality of the OME registry: HTTP routing,
//! controllers, services, repositories, configuration and startup.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
