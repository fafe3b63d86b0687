use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    data::CharacterRepository,
    error::Error,
    model::{api::ErrorDto, app::AppState, catalog::CharacterDto},
};

pub static PEOPLE_TAG: &str = "people";

/// List all catalog characters
///
/// Returns every character in storage order. No filtering, sorting, or
/// pagination.
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "All catalog characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let character_repository = CharacterRepository::new(&state.db);

    let characters = character_repository.get_all().await?;

    let character_dtos: Vec<CharacterDto> = characters.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, axum::Json(character_dtos)).into_response())
}

/// Get a single catalog character by ID
#[utoipa::path(
    get,
    path = "/people/{people_id}",
    tag = PEOPLE_TAG,
    params(
        ("people_id" = i32, Path, description = "ID of the character to fetch")
    ),
    responses(
        (status = 200, description = "The requested character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let character_repository = CharacterRepository::new(&state.db);

    let character = if let Some(character) = character_repository.get_by_id(people_id).await? {
        character
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "Personaje no encontrado".to_string(),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, axum::Json(CharacterDto::from(character))).into_response())
}
