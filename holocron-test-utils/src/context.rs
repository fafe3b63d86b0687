//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The
//! context wraps an in-memory SQLite database and exposes fixture insertion
//! helpers for seeding catalog rows, users, and favorites.

use sea_orm::{
    sea_query::TableCreateStatement, ActiveModelTrait, ConnectionTrait, Database,
    DatabaseConnection,
};

use crate::{error::TestError, fixtures};

/// Test context returned by [`TestBuilder::build`](crate::TestBuilder::build).
///
/// Most tests should construct this via [`TestBuilder`](crate::TestBuilder)
/// rather than directly.
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed
    /// from it.
    ///
    /// This allows conversion to the application's `AppState` without creating
    /// a circular dependency between the test-utils crate and the main crate.
    pub fn into_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Create database tables from schema statements.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Insert a user with the given ID.
    ///
    /// Email and name are derived from the ID so fixtures stay deterministic.
    pub async fn insert_user(&self, user_id: i32) -> Result<entity::user::Model, TestError> {
        let user = fixtures::mock_user(user_id).insert(&self.db).await?;

        Ok(user)
    }

    /// Insert a catalog character with the given ID.
    pub async fn insert_character(
        &self,
        character_id: i32,
    ) -> Result<entity::character::Model, TestError> {
        let character = fixtures::mock_character(character_id).insert(&self.db).await?;

        Ok(character)
    }

    /// Insert a catalog vehicle with the given ID.
    pub async fn insert_vehicle(
        &self,
        vehicle_id: i32,
    ) -> Result<entity::vehicle::Model, TestError> {
        let vehicle = fixtures::mock_vehicle(vehicle_id).insert(&self.db).await?;

        Ok(vehicle)
    }

    /// Insert a favorite row linking a user to a character.
    pub async fn insert_character_favorite(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        let favorite = fixtures::mock_character_favorite(user_id, character_id)
            .insert(&self.db)
            .await?;

        Ok(favorite)
    }

    /// Insert a favorite row linking a user to a vehicle.
    pub async fn insert_vehicle_favorite(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        let favorite = fixtures::mock_vehicle_favorite(user_id, vehicle_id)
            .insert(&self.db)
            .await?;

        Ok(favorite)
    }
}
