//! Setup macros for tests that only need tables.
//!
//! These expand to a [`TestBuilder`](crate::TestBuilder) chain and are the shortest way
//! to get a [`TestContext`](crate::TestContext) in unit tests.

/// Create a test context with only the provided entity tables.
///
/// With no arguments, the database is left without any tables, which is used to
/// exercise database error paths.
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}

/// Create a test context with every registry table, plus any additional entities.
#[macro_export]
macro_rules! test_setup_with_registry_tables {
    () => {{
        $crate::TestBuilder::new().with_registry_tables().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            .with_registry_tables()
            $(.with_table($entity))+
            .build()
            .await
    }};
}
