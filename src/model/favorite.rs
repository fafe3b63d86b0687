use serde::{Deserialize, Serialize};

use crate::model::catalog::{CharacterDto, VehicleDto};

/// One entry in a user's favorites listing.
///
/// Serializes as the wrapped catalog entity's fields plus a `type` tag of
/// `"people"` or `"vehiculo"`, e.g. `{"type": "people", "id": 5, ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(tag = "type")]
pub enum FavoriteDto {
    #[serde(rename = "people")]
    People(CharacterDto),
    #[serde(rename = "vehiculo")]
    Vehicle(VehicleDto),
}
