//! Test fixture modules for database record creation.
//!
//! - `geografia` - continents, countries and cities
//! - `registry` - universities and their campuses

pub mod geografia;
pub mod registry;
