use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Absent content, raised by controllers when a query returns no document.
///
/// Queries themselves express "not found" as `None`; this type only exists so the HTTP
/// layer can answer with a 404.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("No game found with slug {0:?}")]
    GameNotFound(String),
    #[error("No mission found with slug {0:?}")]
    MissionNotFound(String),
    #[error("No published guide found with slug {0:?}")]
    GuideNotFound(String),
    #[error("No {kind} record found with ID {id:?} in the fallback dataset")]
    FallbackRecordNotFound { kind: String, id: String },
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
