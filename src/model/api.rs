use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response for a successful mutation with no payload beyond a message
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    /// The human-readable confirmation message
    pub message: String,
}
