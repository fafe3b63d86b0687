//! Tests for the catalog vehicle endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::controller::vehicle::{get_vehicle, get_vehicles};

use super::*;

/// Expect the get-by-id fields to match the list entry for the same key
#[tokio::test]
async fn get_by_id_matches_list_entry() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_vehicle(8)
        .build()
        .await?;

    let list_resp = get_vehicles(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(list_resp.status(), StatusCode::OK);

    let list_body = body_json(list_resp).await;
    let list_entry = list_body.as_array().unwrap()[0].clone();

    let get_resp = get_vehicle(State(test.into_app_state()), Path(8))
        .await
        .unwrap()
        .into_response();
    assert_eq!(get_resp.status(), StatusCode::OK);

    let get_body = body_json(get_resp).await;
    assert_eq!(get_body, list_entry);

    Ok(())
}

/// Expect 404 with an error body for a vehicle ID that does not exist
#[tokio::test]
async fn get_by_id_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_vehicle(State(test.into_app_state()), Path(99)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "Vehículo no encontrado");

    Ok(())
}
