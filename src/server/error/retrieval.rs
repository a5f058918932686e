use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::content::query::QueryName};

/// Failure reported by a content store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Request could not be sent or the response body could not be read.
    #[error("Request to content store failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Content store answered with a non-success status.
    #[error("Content store responded with status {status}: {message}")]
    Status { status: u16, message: String },
    /// Response body did not match the expected view model.
    #[error("Failed to decode content store response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A named content query failed.
///
/// No partial result is produced; callers render an error or empty state instead.
#[derive(Error, Debug)]
#[error("Content query {query} failed: {source}")]
pub struct RetrievalError {
    pub query: QueryName,
    #[source]
    pub source: StoreError,
}

impl RetrievalError {
    /// Attributes a store failure to the query that caused it.
    pub fn new(query: QueryName, source: StoreError) -> Self {
        Self { query, source }
    }
}

impl IntoResponse for RetrievalError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: "Failed to retrieve content, please try again later.".to_string(),
            }),
        )
            .into_response()
    }
}
