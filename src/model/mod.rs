pub mod api;
pub mod app;
pub mod catalog;
pub mod favorite;
pub mod user;
