use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}
