//! Data access layer.
//!
//! One repository per table, each borrowing a [`sea_orm::DatabaseConnection`]
//! and exposing the queries the controllers and services need.

pub mod character;
pub mod favorite;
pub mod user;
pub mod vehicle;

pub use character::CharacterRepository;
pub use favorite::FavoriteRepository;
pub use user::UserRepository;
pub use vehicle::VehicleRepository;
