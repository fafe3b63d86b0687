//! HTTP controllers.
//!
//! Request handlers for the catalog read endpoints and the favorites
//! mutations. Handlers validate presence of required parameters, delegate to
//! the repositories or the favorites service, and map outcomes to JSON
//! responses with HTTP status codes.

pub mod favorite;
pub mod people;
pub mod user;
pub mod vehicle;
