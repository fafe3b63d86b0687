use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get all users in storage order
    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find().all(self.db).await
    }

    /// Get a user by its ID
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }
}
