use ome_test_utils::prelude::*;

use crate::{
    model::universidad::{CampusUpdateEntryDto, CreateUniversidadDto},
    server::{
        data::{campus_sede::CampusSedeRepository, universidad::UniversidadRepository},
        error::{registry::RegistryError, Error},
        model::registry::{NewUniversidad, UpdateUniversidad},
        service::universidad::UniversidadService,
    },
};
