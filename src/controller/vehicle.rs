use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    data::VehicleRepository,
    error::Error,
    model::{api::ErrorDto, app::AppState, catalog::VehicleDto},
};

pub static VEHICLE_TAG: &str = "vehiculo";

/// List all catalog vehicles
///
/// Returns every vehicle in storage order. No filtering, sorting, or
/// pagination.
#[utoipa::path(
    get,
    path = "/vehiculo",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "All catalog vehicles", body = Vec<VehicleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let vehicle_repository = VehicleRepository::new(&state.db);

    let vehicles = vehicle_repository.get_all().await?;

    let vehicle_dtos: Vec<VehicleDto> = vehicles.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, axum::Json(vehicle_dtos)).into_response())
}

/// Get a single catalog vehicle by ID
#[utoipa::path(
    get,
    path = "/vehiculo/{vehicle_id}",
    tag = VEHICLE_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "ID of the vehicle to fetch")
    ),
    responses(
        (status = 200, description = "The requested vehicle", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let vehicle_repository = VehicleRepository::new(&state.db);

    let vehicle = if let Some(vehicle) = vehicle_repository.get_by_id(vehicle_id).await? {
        vehicle
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "Vehículo no encontrado".to_string(),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, axum::Json(VehicleDto::from(vehicle))).into_response())
}
