use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get all catalog characters in storage order
    pub async fn get_all(&self) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find().all(self.db).await
    }

    /// Get a character by its ID
    pub async fn get_by_id(
        &self,
        character_id: i32,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }
}
