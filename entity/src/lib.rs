//! `SeaORM` entities for the OME registry schema.

pub mod prelude;

pub mod asistente;
pub mod beneficio;
pub mod campus_sede;
pub mod ciudad;
pub mod continente;
pub mod pais;
pub mod pre_uach;
pub mod universidad;
