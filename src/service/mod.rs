//! Service layer.
//!
//! Business logic sitting between the HTTP controllers and the repositories.
//! The favorites service owns the existence checks, duplicate prevention,
//! and listing assembly the endpoints share.

pub mod favorite;

pub use favorite::FavoriteService;
