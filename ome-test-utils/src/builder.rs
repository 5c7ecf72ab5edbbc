//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. Configuration methods are chained together and all queued operations run
//! during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// geography fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_registry_tables: bool,

    // Database fixtures to insert
    continentes: Vec<i32>,
    paises: Vec<(i32, i32)>,   // (pais_id, continente_id)
    ciudades: Vec<(i32, i32)>, // (ciudad_id, pais_id)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_registry_tables: false,
            continentes: Vec::new(),
            paises: Vec::new(),
            ciudades: Vec::new(),
        }
    }

    /// Add every registry table to the test database.
    ///
    /// Creates Continente, Pais, Ciudad, Universidad and CampusSede, in that order so
    /// foreign keys resolve.
    pub fn with_registry_tables(mut self) -> Self {
        self.include_registry_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during
    /// `build()`. Tables are created after the registry tables, in the order added.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ome_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), ome_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Beneficio)
    ///     .with_table(PreUach)
    ///     .with_table(Asistente)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert mock continent into database.
    pub fn with_mock_continente(mut self, continente_id: i32) -> Self {
        self.continentes.push(continente_id);
        self
    }

    /// Insert mock country into database, creating its continent if missing.
    pub fn with_mock_pais(mut self, pais_id: i32, continente_id: i32) -> Self {
        self.paises.push((pais_id, continente_id));
        self
    }

    /// Insert mock city into database.
    ///
    /// The country is created as well (on continent 1) if it doesn't exist yet.
    pub fn with_mock_ciudad(mut self, ciudad_id: i32, pais_id: i32) -> Self {
        self.ciudades.push((ciudad_id, pais_id));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_registry_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Continente),
                schema.create_table_from_entity(entity::prelude::Pais),
                schema.create_table_from_entity(entity::prelude::Ciudad),
                schema.create_table_from_entity(entity::prelude::Universidad),
                schema.create_table_from_entity(entity::prelude::CampusSede),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert geography fixtures, parents first
        for continente_id in self.continentes {
            setup
                .geografia()
                .insert_mock_continente(continente_id)
                .await?;
        }

        for (pais_id, continente_id) in self.paises {
            setup
                .geografia()
                .insert_mock_pais(pais_id, continente_id)
                .await?;
        }

        for (ciudad_id, pais_id) in self.ciudades {
            setup
                .geografia()
                .insert_mock_ciudad(ciudad_id, pais_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
