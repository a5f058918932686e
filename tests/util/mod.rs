//! Helpers for building application state against the mock content store.

use std::sync::Arc;

use axum::{body::Body, http::Response};
use game_guides::{
    model::image::ImageUrlBuilder,
    server::{
        content::{
            sanity::{SanityConfig, SanityStore},
            QueryClient,
        },
        model::app::AppState,
    },
};
use game_guides_test_utils::{TestContext, TestError};
use serde_json::Value;

/// Extension trait for TestContext to create AppState backed by the mock server
pub trait TestContextExt {
    fn sanity_config(&self) -> SanityConfig;
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn sanity_config(&self) -> SanityConfig {
        SanityConfig {
            project_id: self.project_id.clone(),
            dataset: self.dataset.clone(),
            api_version: self.api_version.clone(),
            token: None,
            use_cdn: false,
            api_host: Some(self.url()),
        }
    }

    fn into_app_state(&self) -> AppState {
        let config = self.sanity_config();
        let images = ImageUrlBuilder::new(&config.project_id, &config.dataset);
        let store = SanityStore::new(config).expect("Failed to build content store");

        AppState {
            content: QueryClient::new(Arc::new(store), images),
        }
    }
}

/// Reads a JSON response body.
pub async fn json_body(response: Response<Body>) -> Result<Value, TestError> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    Ok(serde_json::from_slice(&bytes)?)
}
