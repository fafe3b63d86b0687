//! Error types for the holocron server.
//!
//! All errors implement `IntoResponse` for Axum HTTP responses and use
//! `thiserror` for ergonomic error definitions.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{error::config::ConfigError, model::api::ErrorDto};

/// Main error type for the holocron server.
///
/// Aggregates domain-specific error types and external library errors into a
/// single unified error type, with `#[from]` conversions for use with the `?`
/// operator. The `IntoResponse` implementation maps errors to HTTP responses.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the full error message for debugging but returns a generic message to
/// the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
