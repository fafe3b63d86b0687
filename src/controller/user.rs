use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    data::UserRepository,
    error::Error,
    model::{api::ErrorDto, app::AppState, favorite::FavoriteDto, user::UserDto},
    service::favorite::{FavoriteService, ListFavoritesOutcome},
};

pub static USER_TAG: &str = "users";

#[derive(Deserialize, utoipa::IntoParams)]
pub struct FavoritesParams {
    /// ID of the user whose favorites to list
    pub user_id: Option<i32>,
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_repository = UserRepository::new(&state.db);

    let users = user_repository.get_all().await?;

    let user_dtos: Vec<UserDto> = users.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, axum::Json(user_dtos)).into_response())
}

/// List a user's favorites
///
/// Character favorites precede vehicle favorites; each entry carries a `type`
/// tag of `"people"` or `"vehiculo"` beside the catalog entity's fields.
/// Favorites whose catalog entity no longer exists are omitted.
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = USER_TAG,
    params(FavoritesParams),
    responses(
        (status = 200, description = "The user's favorites", body = Vec<FavoriteDto>),
        (status = 400, description = "Missing user_id parameter", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Query(params): Query<FavoritesParams>,
) -> Result<impl IntoResponse, Error> {
    // Zero is treated the same as an absent user_id.
    let user_id = match params.user_id {
        Some(user_id) if user_id != 0 => user_id,
        _ => {
            return Ok((
                StatusCode::BAD_REQUEST,
                axum::Json(ErrorDto {
                    error: "Debes proporcionar user_id como parámetro".to_string(),
                }),
            )
                .into_response());
        }
    };

    let favorite_service = FavoriteService::new(&state.db);

    let favorites = match favorite_service.get_favorites(user_id).await? {
        ListFavoritesOutcome::Listing(favorites) => favorites,
        ListFavoritesOutcome::UserNotFound => {
            return Ok((
                StatusCode::NOT_FOUND,
                axum::Json(ErrorDto {
                    error: "Usuario no encontrado".to_string(),
                }),
            )
                .into_response());
        }
    };

    Ok((StatusCode::OK, axum::Json(favorites)).into_response())
}
