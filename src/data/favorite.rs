use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get the favorite row matching (user, character) exactly, if any
    pub async fn get_by_user_and_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::CharacterId.eq(character_id))
            .one(self.db)
            .await
    }

    /// Get the favorite row matching (user, vehicle) exactly, if any
    pub async fn get_by_user_and_vehicle(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::VehicleId.eq(vehicle_id))
            .one(self.db)
            .await
    }

    /// Get all character favorites for a user, in storage order
    pub async fn get_character_favorites_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::CharacterId.is_not_null())
            .all(self.db)
            .await
    }

    /// Get all vehicle favorites for a user, in storage order
    pub async fn get_vehicle_favorites_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::VehicleId.is_not_null())
            .all(self.db)
            .await
    }

    /// Create a favorite row linking a user to a character
    ///
    /// The vehicle column is left null; a favorite row references exactly one
    /// catalog entity.
    pub async fn create_character_favorite(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<entity::favorite::Model, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(Some(character_id)),
            vehicle_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Create a favorite row linking a user to a vehicle
    pub async fn create_vehicle_favorite(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<entity::favorite::Model, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(None),
            vehicle_id: ActiveValue::Set(Some(vehicle_id)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Delete the favorite row(s) matching (user, character)
    ///
    /// Returns OK regardless of a favorite existing; check the
    /// [`DeleteResult::rows_affected`] field for the outcome.
    pub async fn delete_character_favorite(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::CharacterId.eq(character_id))
            .exec(self.db)
            .await
    }

    /// Delete the favorite row(s) matching (user, vehicle)
    pub async fn delete_vehicle_favorite(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::VehicleId.eq(vehicle_id))
            .exec(self.db)
            .await
    }
}
