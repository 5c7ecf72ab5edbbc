//! University and campus fixture utilities.
//!
//! `data` inserts records into the test database, `factory` builds in-memory models
//! for tests that don't touch the database.

use crate::TestContext;

pub mod data;
pub mod factory;

impl TestContext {
    pub fn registry<'a>(&'a self) -> RegistryFixtures<'a> {
        RegistryFixtures { setup: self }
    }
}

pub struct RegistryFixtures<'a> {
    pub setup: &'a TestContext,
}
