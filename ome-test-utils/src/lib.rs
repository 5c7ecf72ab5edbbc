//! Test utilities for the OME registry.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and fixtures
//! a test needs, and the resulting [`TestContext`] exposes the in-memory database and
//! fixture helpers used while the test runs.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::registry::factory, test_setup_with_registry_tables, test_setup_with_tables,
        TestBuilder, TestContext, TestError,
    };
}
