
use sea_orm::DatabaseConnection;

use crate::{
    data::{CharacterRepository, FavoriteRepository, UserRepository, VehicleRepository},
    error::Error,
    model::favorite::FavoriteDto,
};

/// Outcome of an add-favorite operation.
///
/// Adding an already-present favorite is an idempotent no-op, not an error,
/// so it gets its own variant rather than an `Err`.
#[derive(Debug, PartialEq, Eq)]
pub enum AddFavoriteOutcome {
    Added,
    AlreadyFavorite,
    UserNotFound,
    TargetNotFound,
}

/// Outcome of a remove-favorite operation.
#[derive(Debug, PartialEq, Eq)]
pub enum RemoveFavoriteOutcome {
    Removed,
    FavoriteNotFound,
    UserNotFound,
    TargetNotFound,
}

/// Outcome of a favorites listing request.
#[derive(Debug)]
pub enum ListFavoritesOutcome {
    Listing(Vec<FavoriteDto>),
    UserNotFound,
}

/// Service for managing a user's favorites.
///
/// Wraps the favorite repository together with the catalog and user
/// repositories so controllers get a single entry point per operation.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assemble the favorites listing for a user.
    ///
    /// Character favorites come first, then vehicle favorites, each group in
    /// storage order. Favorites whose catalog entity has been deleted are
    /// silently skipped rather than surfaced as broken references.
    pub async fn get_favorites(&self, user_id: i32) -> Result<ListFavoritesOutcome, Error> {
        let user_repo = UserRepository::new(self.db);
        let character_repo = CharacterRepository::new(self.db);
        let vehicle_repo = VehicleRepository::new(self.db);
        let favorite_repo = FavoriteRepository::new(self.db);

        if user_repo.get_by_id(user_id).await?.is_none() {
            return Ok(ListFavoritesOutcome::UserNotFound);
        }

        let mut favorites = Vec::new();

        for favorite in favorite_repo
            .get_character_favorites_by_user_id(user_id)
            .await?
        {
            let Some(character_id) = favorite.character_id else {
                continue;
            };

            if let Some(character) = character_repo.get_by_id(character_id).await? {
                favorites.push(FavoriteDto::People(character.into()));
            }
        }

        for favorite in favorite_repo
            .get_vehicle_favorites_by_user_id(user_id)
            .await?
        {
            let Some(vehicle_id) = favorite.vehicle_id else {
                continue;
            };

            if let Some(vehicle) = vehicle_repo.get_by_id(vehicle_id).await? {
                favorites.push(FavoriteDto::Vehicle(vehicle.into()));
            }
        }

        Ok(ListFavoritesOutcome::Listing(favorites))
    }

    /// Add a character to a user's favorites.
    ///
    /// The duplicate check and the insert are separate statements; two
    /// concurrent identical requests can both pass the check and insert a
    /// duplicate row. The listing tolerates duplicates, so that race is
    /// accepted.
    pub async fn add_character_favorite(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<AddFavoriteOutcome, Error> {
        let user_repo = UserRepository::new(self.db);
        let character_repo = CharacterRepository::new(self.db);
        let favorite_repo = FavoriteRepository::new(self.db);

        if user_repo.get_by_id(user_id).await?.is_none() {
            return Ok(AddFavoriteOutcome::UserNotFound);
        }

        if character_repo.get_by_id(character_id).await?.is_none() {
            return Ok(AddFavoriteOutcome::TargetNotFound);
        }

        if favorite_repo
            .get_by_user_and_character(user_id, character_id)
            .await?
            .is_some()
        {
            return Ok(AddFavoriteOutcome::AlreadyFavorite);
        }

        favorite_repo
            .create_character_favorite(user_id, character_id)
            .await?;

        Ok(AddFavoriteOutcome::Added)
    }

    /// Add a vehicle to a user's favorites.
    pub async fn add_vehicle_favorite(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<AddFavoriteOutcome, Error> {
        let user_repo = UserRepository::new(self.db);
        let vehicle_repo = VehicleRepository::new(self.db);
        let favorite_repo = FavoriteRepository::new(self.db);

        if user_repo.get_by_id(user_id).await?.is_none() {
            return Ok(AddFavoriteOutcome::UserNotFound);
        }

        if vehicle_repo.get_by_id(vehicle_id).await?.is_none() {
            return Ok(AddFavoriteOutcome::TargetNotFound);
        }

        if favorite_repo
            .get_by_user_and_vehicle(user_id, vehicle_id)
            .await?
            .is_some()
        {
            return Ok(AddFavoriteOutcome::AlreadyFavorite);
        }

        favorite_repo
            .create_vehicle_favorite(user_id, vehicle_id)
            .await?;

        Ok(AddFavoriteOutcome::Added)
    }

    /// Remove a character from a user's favorites.
    ///
    /// The target character must still exist even though deletion would not
    /// require it; a favorite referencing a deleted character cannot be
    /// removed through this operation.
    pub async fn remove_character_favorite(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<RemoveFavoriteOutcome, Error> {
        let user_repo = UserRepository::new(self.db);
        let character_repo = CharacterRepository::new(self.db);
        let favorite_repo = FavoriteRepository::new(self.db);

        if user_repo.get_by_id(user_id).await?.is_none() {
            return Ok(RemoveFavoriteOutcome::UserNotFound);
        }

        if character_repo.get_by_id(character_id).await?.is_none() {
            return Ok(RemoveFavoriteOutcome::TargetNotFound);
        }

        let result = favorite_repo
            .delete_character_favorite(user_id, character_id)
            .await?;

        if result.rows_affected > 0 {
            Ok(RemoveFavoriteOutcome::Removed)
        } else {
            Ok(RemoveFavoriteOutcome::FavoriteNotFound)
        }
    }

    /// Remove a vehicle from a user's favorites.
    pub async fn remove_vehicle_favorite(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<RemoveFavoriteOutcome, Error> {
        let user_repo = UserRepository::new(self.db);
        let vehicle_repo = VehicleRepository::new(self.db);
        let favorite_repo = FavoriteRepository::new(self.db);

        if user_repo.get_by_id(user_id).await?.is_none() {
            return Ok(RemoveFavoriteOutcome::UserNotFound);
        }

        if vehicle_repo.get_by_id(vehicle_id).await?.is_none() {
            return Ok(RemoveFavoriteOutcome::TargetNotFound);
        }

        let result = favorite_repo
            .delete_vehicle_favorite(user_id, vehicle_id)
            .await?;

        if result.rows_affected > 0 {
            Ok(RemoveFavoriteOutcome::Removed)
        } else {
            Ok(RemoveFavoriteOutcome::FavoriteNotFound)
        }
    }
}
