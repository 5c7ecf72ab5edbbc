//! Service layer for the registry operations.
//!
//! Services compose repositories, own transaction boundaries and map database rows into
//! the DTOs returned by the controllers.

pub mod campus_sede;
pub mod geografia;
pub mod seed;
pub mod universidad;
