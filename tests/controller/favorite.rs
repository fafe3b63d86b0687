//! Tests for the add/remove favorite endpoints, covering the documented
//! request/response transcripts.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::controller::{
    favorite::{
        add_favorite_person, add_favorite_vehicle, delete_favorite_person,
        delete_favorite_vehicle, FavoriteBody,
    },
    user::{get_user_favorites, FavoritesParams},
};
use sea_orm::EntityTrait;

use super::*;

/// Expect 201 on first add and 200 on the identical repeat, with exactly one
/// persisted row
#[tokio::test]
async fn add_person_then_repeat() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user(3)
        .with_character(5)
        .build()
        .await?;

    let resp = add_favorite_person(
        State(test.into_app_state()),
        Path(5),
        Json(FavoriteBody { user_id: Some(3) }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Personaje añadido a favoritos");

    let resp = add_favorite_person(
        State(test.into_app_state()),
        Path(5),
        Json(FavoriteBody { user_id: Some(3) }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "El personaje ya está en favoritos");

    let rows = entity::prelude::Favorite::find().all(&test.db).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}

/// Expect 400 with the documented error body when user_id is missing
#[tokio::test]
async fn add_person_requires_user_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_character(5)
        .build()
        .await?;

    let resp = add_favorite_person(
        State(test.into_app_state()),
        Path(5),
        Json(FavoriteBody { user_id: None }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Falta user_id en el cuerpo");

    Ok(())
}

/// Expect 400 with the documented error body when user_id is zero, for both
/// the add and the delete endpoint
#[tokio::test]
async fn mutations_reject_zero_user_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user(3)
        .with_character(5)
        .build()
        .await?;

    let resp = add_favorite_person(
        State(test.into_app_state()),
        Path(5),
        Json(FavoriteBody { user_id: Some(0) }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Falta user_id en el cuerpo");

    let resp = delete_favorite_person(
        State(test.into_app_state()),
        Path(5),
        Json(FavoriteBody { user_id: Some(0) }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Falta user_id en el cuerpo");

    Ok(())
}

/// Expect 404 when the user does not exist
#[tokio::test]
async fn add_person_rejects_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_character(5)
        .build()
        .await?;

    let resp = add_favorite_person(
        State(test.into_app_state()),
        Path(5),
        Json(FavoriteBody { user_id: Some(3) }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Usuario no encontrado");

    Ok(())
}

/// Expect 404 when the character does not exist
#[tokio::test]
async fn add_person_rejects_missing_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user(3)
        .build()
        .await?;

    let resp = add_favorite_person(
        State(test.into_app_state()),
        Path(5),
        Json(FavoriteBody { user_id: Some(3) }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Personaje no encontrado");

    Ok(())
}

/// Expect 200 on delete and 404 with the documented error body on the repeat
#[tokio::test]
async fn delete_person_then_repeat() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user(3)
        .with_character(5)
        .with_character_favorite(3, 5)
        .build()
        .await?;

    let resp = delete_favorite_person(
        State(test.into_app_state()),
        Path(5),
        Json(FavoriteBody { user_id: Some(3) }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Personaje eliminado de favoritos");

    let resp = delete_favorite_person(
        State(test.into_app_state()),
        Path(5),
        Json(FavoriteBody { user_id: Some(3) }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Personaje no encontrado en favoritos");

    Ok(())
}

/// Expect a delete miss to leave other favorites untouched
#[tokio::test]
async fn delete_miss_leaves_storage_unchanged() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user(3)
        .with_character(5)
        .with_vehicle(8)
        .with_vehicle_favorite(3, 8)
        .build()
        .await?;

    let resp = delete_favorite_person(
        State(test.into_app_state()),
        Path(5),
        Json(FavoriteBody { user_id: Some(3) }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let rows = entity::prelude::Favorite::find().all(&test.db).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}

/// Expect the listing to drop an entity after its favorite is removed
#[tokio::test]
async fn add_then_delete_removes_from_listing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user(3)
        .with_vehicle(8)
        .build()
        .await?;

    add_favorite_vehicle(
        State(test.into_app_state()),
        Path(8),
        Json(FavoriteBody { user_id: Some(3) }),
    )
    .await
    .unwrap();

    delete_favorite_vehicle(
        State(test.into_app_state()),
        Path(8),
        Json(FavoriteBody { user_id: Some(3) }),
    )
    .await
    .unwrap();

    let resp = get_user_favorites(
        State(test.into_app_state()),
        Query(FavoritesParams { user_id: Some(3) }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body, serde_json::json!([]));

    Ok(())
}

/// Expect the vehicle endpoints to mirror the character endpoints' messages
#[tokio::test]
async fn vehicle_endpoints_use_vehicle_messages() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user(3)
        .with_vehicle(8)
        .build()
        .await?;

    let resp = add_favorite_vehicle(
        State(test.into_app_state()),
        Path(8),
        Json(FavoriteBody { user_id: Some(3) }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Vehículo añadido a favoritos");

    let resp = add_favorite_vehicle(
        State(test.into_app_state()),
        Path(8),
        Json(FavoriteBody { user_id: Some(3) }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "El vehículo ya está en favoritos");

    let resp = delete_favorite_vehicle(
        State(test.into_app_state()),
        Path(8),
        Json(FavoriteBody { user_id: Some(3) }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Vehículo eliminado de favoritos");

    let resp = delete_favorite_vehicle(
        State(test.into_app_state()),
        Path(8),
        Json(FavoriteBody { user_id: Some(3) }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Vehículo no encontrado en favoritos");

    Ok(())
}
