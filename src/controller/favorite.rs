use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    error::Error,
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
    },
    service::favorite::{AddFavoriteOutcome, FavoriteService, RemoveFavoriteOutcome},
};

pub static FAVORITE_TAG: &str = "favorite";

/// Request body for the add/remove favorite endpoints.
///
/// `user_id` is optional at the schema level so the handler can answer with
/// the documented 400 body instead of a framework rejection when it is
/// missing.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct FavoriteBody {
    /// ID of the user whose favorites to modify
    pub user_id: Option<i32>,
}

/// Extract a usable user ID from the request body, treating zero as absent.
fn require_user_id(body: &FavoriteBody) -> Result<i32, axum::response::Response> {
    match body.user_id {
        Some(user_id) if user_id != 0 => Ok(user_id),
        _ => Err((
            StatusCode::BAD_REQUEST,
            axum::Json(ErrorDto {
                error: "Falta user_id en el cuerpo".to_string(),
            }),
        )
            .into_response()),
    }
}

/// Add a character to a user's favorites
///
/// Adding a character that is already a favorite responds 200 with a
/// confirmation message rather than an error.
#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("people_id" = i32, Path, description = "ID of the character to favorite")
    ),
    request_body = FavoriteBody,
    responses(
        (status = 201, description = "Character added to favorites", body = MessageDto),
        (status = 200, description = "Character was already a favorite", body = MessageDto),
        (status = 400, description = "Missing user_id in body", body = ErrorDto),
        (status = 404, description = "User or character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
    axum::Json(body): axum::Json<FavoriteBody>,
) -> Result<impl IntoResponse, Error> {
    let user_id = match require_user_id(&body) {
        Ok(user_id) => user_id,
        Err(response) => return Ok(response),
    };

    let favorite_service = FavoriteService::new(&state.db);

    let response = match favorite_service
        .add_character_favorite(user_id, people_id)
        .await?
    {
        AddFavoriteOutcome::Added => (
            StatusCode::CREATED,
            axum::Json(MessageDto {
                message: "Personaje añadido a favoritos".to_string(),
            }),
        )
            .into_response(),
        AddFavoriteOutcome::AlreadyFavorite => (
            StatusCode::OK,
            axum::Json(MessageDto {
                message: "El personaje ya está en favoritos".to_string(),
            }),
        )
            .into_response(),
        AddFavoriteOutcome::UserNotFound => (
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "Usuario no encontrado".to_string(),
            }),
        )
            .into_response(),
        AddFavoriteOutcome::TargetNotFound => (
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "Personaje no encontrado".to_string(),
            }),
        )
            .into_response(),
    };

    Ok(response)
}

/// Remove a character from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("people_id" = i32, Path, description = "ID of the character to unfavorite")
    ),
    request_body = FavoriteBody,
    responses(
        (status = 200, description = "Character removed from favorites", body = MessageDto),
        (status = 400, description = "Missing user_id in body", body = ErrorDto),
        (status = 404, description = "User, character, or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_person(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
    axum::Json(body): axum::Json<FavoriteBody>,
) -> Result<impl IntoResponse, Error> {
    let user_id = match require_user_id(&body) {
        Ok(user_id) => user_id,
        Err(response) => return Ok(response),
    };

    let favorite_service = FavoriteService::new(&state.db);

    let response = match favorite_service
        .remove_character_favorite(user_id, people_id)
        .await?
    {
        RemoveFavoriteOutcome::Removed => (
            StatusCode::OK,
            axum::Json(MessageDto {
                message: "Personaje eliminado de favoritos".to_string(),
            }),
        )
            .into_response(),
        RemoveFavoriteOutcome::FavoriteNotFound => (
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "Personaje no encontrado en favoritos".to_string(),
            }),
        )
            .into_response(),
        RemoveFavoriteOutcome::UserNotFound => (
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "Usuario no encontrado".to_string(),
            }),
        )
            .into_response(),
        RemoveFavoriteOutcome::TargetNotFound => (
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "Personaje no encontrado".to_string(),
            }),
        )
            .into_response(),
    };

    Ok(response)
}

/// Add a vehicle to a user's favorites
///
/// Adding a vehicle that is already a favorite responds 200 with a
/// confirmation message rather than an error.
#[utoipa::path(
    post,
    path = "/favorite/vehiculo/{vehicle_id}",
    tag = FAVORITE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "ID of the vehicle to favorite")
    ),
    request_body = FavoriteBody,
    responses(
        (status = 201, description = "Vehicle added to favorites", body = MessageDto),
        (status = 200, description = "Vehicle was already a favorite", body = MessageDto),
        (status = 400, description = "Missing user_id in body", body = ErrorDto),
        (status = 404, description = "User or vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
    axum::Json(body): axum::Json<FavoriteBody>,
) -> Result<impl IntoResponse, Error> {
    let user_id = match require_user_id(&body) {
        Ok(user_id) => user_id,
        Err(response) => return Ok(response),
    };

    let favorite_service = FavoriteService::new(&state.db);

    let response = match favorite_service
        .add_vehicle_favorite(user_id, vehicle_id)
        .await?
    {
        AddFavoriteOutcome::Added => (
            StatusCode::CREATED,
            axum::Json(MessageDto {
                message: "Vehículo añadido a favoritos".to_string(),
            }),
        )
            .into_response(),
        AddFavoriteOutcome::AlreadyFavorite => (
            StatusCode::OK,
            axum::Json(MessageDto {
                message: "El vehículo ya está en favoritos".to_string(),
            }),
        )
            .into_response(),
        AddFavoriteOutcome::UserNotFound => (
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "Usuario no encontrado".to_string(),
            }),
        )
            .into_response(),
        AddFavoriteOutcome::TargetNotFound => (
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "Vehículo no encontrado".to_string(),
            }),
        )
            .into_response(),
    };

    Ok(response)
}

/// Remove a vehicle from a user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/vehiculo/{vehicle_id}",
    tag = FAVORITE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "ID of the vehicle to unfavorite")
    ),
    request_body = FavoriteBody,
    responses(
        (status = 200, description = "Vehicle removed from favorites", body = MessageDto),
        (status = 400, description = "Missing user_id in body", body = ErrorDto),
        (status = 404, description = "User, vehicle, or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
    axum::Json(body): axum::Json<FavoriteBody>,
) -> Result<impl IntoResponse, Error> {
    let user_id = match require_user_id(&body) {
        Ok(user_id) => user_id,
        Err(response) => return Ok(response),
    };

    let favorite_service = FavoriteService::new(&state.db);

    let response = match favorite_service
        .remove_vehicle_favorite(user_id, vehicle_id)
        .await?
    {
        RemoveFavoriteOutcome::Removed => (
            StatusCode::OK,
            axum::Json(MessageDto {
                message: "Vehículo eliminado de favoritos".to_string(),
            }),
        )
            .into_response(),
        RemoveFavoriteOutcome::FavoriteNotFound => (
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "Vehículo no encontrado en favoritos".to_string(),
            }),
        )
            .into_response(),
        RemoveFavoriteOutcome::UserNotFound => (
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "Usuario no encontrado".to_string(),
            }),
        )
            .into_response(),
        RemoveFavoriteOutcome::TargetNotFound => (
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "Vehículo no encontrado".to_string(),
            }),
        )
            .into_response(),
    };

    Ok(response)
}
