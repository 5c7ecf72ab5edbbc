use ome_test_utils::prelude::*;

use crate::server::data::geografia::{
    ciudad::{CiudadRepository, NewCiudad},
    continente::ContinenteRepository,
    pais::PaisRepository,
};
