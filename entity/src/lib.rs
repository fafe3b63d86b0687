pub mod prelude;

pub mod character;
pub mod favorite;
pub mod user;
pub mod vehicle;
