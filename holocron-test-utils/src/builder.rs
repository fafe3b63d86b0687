//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test
//! environments before execution. Configuration methods chain together and
//! all queued operations execute during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization.
///
/// Sets up an in-memory SQLite database with the requested tables and
/// fixtures, finalized with [`build`](TestBuilder::build).
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,

    users: Vec<i32>,
    characters: Vec<i32>,
    vehicles: Vec<i32>,
    character_favorites: Vec<(i32, i32)>, // (user_id, character_id)
    vehicle_favorites: Vec<(i32, i32)>,   // (user_id, vehicle_id)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            users: Vec::new(),
            characters: Vec::new(),
            vehicles: Vec::new(),
            character_favorites: Vec::new(),
            vehicle_favorites: Vec::new(),
        }
    }

    /// Add the standard catalog tables to the test database: User, Character,
    /// Vehicle, and Favorite.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user fixture with the given ID during `build()`.
    pub fn with_user(mut self, user_id: i32) -> Self {
        self.users.push(user_id);
        self
    }

    /// Insert a character fixture with the given ID during `build()`.
    pub fn with_character(mut self, character_id: i32) -> Self {
        self.characters.push(character_id);
        self
    }

    /// Insert a vehicle fixture with the given ID during `build()`.
    pub fn with_vehicle(mut self, vehicle_id: i32) -> Self {
        self.vehicles.push(vehicle_id);
        self
    }

    /// Insert a character favorite during `build()`.
    ///
    /// The referenced user and character fixtures must be queued as well.
    pub fn with_character_favorite(mut self, user_id: i32, character_id: i32) -> Self {
        self.character_favorites.push((user_id, character_id));
        self
    }

    /// Insert a vehicle favorite during `build()`.
    ///
    /// The referenced user and vehicle fixtures must be queued as well.
    pub fn with_vehicle_favorite(mut self, user_id: i32, vehicle_id: i32) -> Self {
        self.vehicle_favorites.push((user_id, vehicle_id));
        self
    }

    /// Execute all queued operations and return the test context.
    ///
    /// Tables are created first, then fixtures insert in dependency order:
    /// users and catalog rows before favorites.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut stmts = Vec::new();

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            stmts.push(schema.create_table_from_entity(entity::prelude::User));
            stmts.push(schema.create_table_from_entity(entity::prelude::Character));
            stmts.push(schema.create_table_from_entity(entity::prelude::Vehicle));
            stmts.push(schema.create_table_from_entity(entity::prelude::Favorite));
        }

        stmts.extend(self.tables);
        context.with_tables(stmts).await?;

        for user_id in self.users {
            context.insert_user(user_id).await?;
        }

        for character_id in self.characters {
            context.insert_character(character_id).await?;
        }

        for vehicle_id in self.vehicles {
            context.insert_vehicle(vehicle_id).await?;
        }

        for (user_id, character_id) in self.character_favorites {
            context.insert_character_favorite(user_id, character_id).await?;
        }

        for (user_id, vehicle_id) in self.vehicle_favorites {
            context.insert_vehicle_favorite(user_id, vehicle_id).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
