//! Tests for the catalog character endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::controller::people::{get_people, get_person};

use super::*;

/// Expect 200 with an empty array when no characters exist
#[tokio::test]
async fn list_returns_empty_array() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_people(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body, serde_json::json!([]));

    Ok(())
}

/// Expect the get-by-id fields to match the list entry for the same key
#[tokio::test]
async fn get_by_id_matches_list_entry() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_character(5)
        .with_character(6)
        .build()
        .await?;

    let list_resp = get_people(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();
    let list_body = body_json(list_resp).await;
    let list_entry = list_body
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["id"] == 5)
        .cloned()
        .unwrap();

    let get_resp = get_person(State(test.into_app_state()), Path(5))
        .await
        .unwrap()
        .into_response();
    assert_eq!(get_resp.status(), StatusCode::OK);

    let get_body = body_json(get_resp).await;
    assert_eq!(get_body, list_entry);

    Ok(())
}

/// Expect 404 with an error body for a character ID that does not exist
#[tokio::test]
async fn get_by_id_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_person(State(test.into_app_state()), Path(99)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "Personaje no encontrado");

    Ok(())
}

/// Expect Err with a 500 response when required tables are missing
#[tokio::test]
async fn list_errors_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_people(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
