//! Factory functions for generating mock registry database models.
//!
//! These are in-memory model instances that don't require database interaction,
//! suitable for unit tests of conversions and validation.

use crate::model::{CampusSedeModel, UniversidadModel};

/// Create a mock university database model.
pub fn mock_universidad_model(id: i32, nombre: &str) -> UniversidadModel {
    UniversidadModel {
        id,
        nombre: nombre.to_string(),
        pais: None,
    }
}

/// Create a mock campus database model with test contact details.
pub fn mock_campus_model(id: i32, universidad_id: i32, ciudad_id: i32) -> CampusSedeModel {
    CampusSedeModel {
        id,
        nombre: format!("Campus {}", id),
        telefono: Some("632221277".to_string()),
        fax: None,
        sitio_web: Some("https://www.uach.cl".to_string()),
        universidad: universidad_id,
        ciudad: ciudad_id,
    }
}
