//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main `ome` crate to keep fixture signatures
//! consistent across tests.

/// Type alias for continent database model.
pub type ContinenteModel = entity::continente::Model;

/// Type alias for country database model.
pub type PaisModel = entity::pais::Model;

/// Type alias for city database model.
pub type CiudadModel = entity::ciudad::Model;

/// Type alias for university database model.
pub type UniversidadModel = entity::universidad::Model;

/// Type alias for campus database model.
pub type CampusSedeModel = entity::campus_sede::Model;
