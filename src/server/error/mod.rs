//! Error types for the game guides server.
//!
//! Each domain has its own `thiserror` enum (configuration, content store access, absent
//! content) which is aggregated into [`Error`]. All errors implement `IntoResponse` so
//! controllers can return them directly with the `?` operator.

pub mod config;
pub mod content;
pub mod retrieval;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError,
        content::ContentError,
        retrieval::{RetrievalError, StoreError},
    },
};

/// Main error type for the game guides server.
///
/// Aggregates the domain-specific error types into a single type with `#[from]` conversions.
/// The `IntoResponse` implementation delegates to each domain error so that absent content
/// maps to 404 and a failed content store query maps to 502.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A content query failed at the transport, HTTP, or decoding level.
    #[error(transparent)]
    RetrievalError(#[from] RetrievalError),
    /// The content store backend could not be set up.
    #[error(transparent)]
    StoreError(#[from] StoreError),
    /// The requested content does not exist.
    #[error(transparent)]
    ContentError(#[from] ContentError),
    /// Failed to parse a request value.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Failed to bind the HTTP listener or serve requests.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::RetrievalError(err) => err.into_response(),
            Self::ContentError(err) => err.into_response(),
            Self::ParseError(reason) => {
                tracing::debug!("Rejected request: {}", reason);

                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: reason })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
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
