use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub birth_year: String,
    pub eye_color: String,
    pub hair_color: String,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            id: character.id,
            name: character.name,
            gender: character.gender,
            birth_year: character.birth_year,
            eye_color: character.eye_color,
            hair_color: character.hair_color,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub passengers: i32,
}

impl From<entity::vehicle::Model> for VehicleDto {
    fn from(vehicle: entity::vehicle::Model) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            model: vehicle.model,
            passengers: vehicle.passengers,
        }
    }
}
