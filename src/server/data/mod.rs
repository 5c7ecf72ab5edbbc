//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries per table and are generic over [`sea_orm::ConnectionTrait`]
//! so the same code runs on a plain connection or inside a transaction.

pub mod campus_sede;
pub mod geografia;
pub mod universidad;
