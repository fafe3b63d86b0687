//! Deterministic fixture factories for test data.
//!
//! Each factory returns an `ActiveModel` with every field populated from the
//! requested ID so assertions can rely on stable values.

use chrono::Utc;
use sea_orm::ActiveValue;

/// Mock user with email and name derived from the ID.
pub fn mock_user(user_id: i32) -> entity::user::ActiveModel {
    entity::user::ActiveModel {
        id: ActiveValue::Set(user_id),
        email: ActiveValue::Set(format!("user{}@tatooine.example", user_id)),
        name: ActiveValue::Set(format!("User {}", user_id)),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
    }
}

/// Mock catalog character with descriptive fields derived from the ID.
pub fn mock_character(character_id: i32) -> entity::character::ActiveModel {
    entity::character::ActiveModel {
        id: ActiveValue::Set(character_id),
        name: ActiveValue::Set(format!("Character {}", character_id)),
        gender: ActiveValue::Set("n/a".to_string()),
        birth_year: ActiveValue::Set("19BBY".to_string()),
        eye_color: ActiveValue::Set("blue".to_string()),
        hair_color: ActiveValue::Set("blond".to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
    }
}

/// Mock catalog vehicle with descriptive fields derived from the ID.
pub fn mock_vehicle(vehicle_id: i32) -> entity::vehicle::ActiveModel {
    entity::vehicle::ActiveModel {
        id: ActiveValue::Set(vehicle_id),
        name: ActiveValue::Set(format!("Vehicle {}", vehicle_id)),
        model: ActiveValue::Set(format!("Model {}", vehicle_id)),
        passengers: ActiveValue::Set(4),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
    }
}

/// Favorite row linking a user to a character, vehicle column left null.
pub fn mock_character_favorite(user_id: i32, character_id: i32) -> entity::favorite::ActiveModel {
    entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        character_id: ActiveValue::Set(Some(character_id)),
        vehicle_id: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
}

/// Favorite row linking a user to a vehicle, character column left null.
pub fn mock_vehicle_favorite(user_id: i32, vehicle_id: i32) -> entity::favorite::ActiveModel {
    entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        character_id: ActiveValue::Set(None),
        vehicle_id: ActiveValue::Set(Some(vehicle_id)),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
}
