//! Geography repositories.
//!
//! Continents, countries and cities form the lookup hierarchy used when picking where a
//! campus is located. Cities reference countries by ID only, so lookups across the
//! hierarchy are done with ID lists instead of joins.

pub mod ciudad;
pub mod continente;
pub mod pais;

#[cfg(test)]
mod tests;
