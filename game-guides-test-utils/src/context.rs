//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns the
//! mock content store server and every mock endpoint registered on it.

use mockito::{Mock, Server, ServerGuard};

use crate::constant::{TEST_API_VERSION, TEST_DATASET, TEST_PROJECT_ID};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_query_endpoint(factory::game_summaries(), 1)
///     .build()
///     .await?;
///
/// let config = SanityConfig {
///     api_host: Some(test.url()),
///     ..
/// };
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Project ID the client should be configured with
    pub project_id: String,
    /// Dataset the client should query
    pub dataset: String,
    /// Query API version the client should use
    pub api_version: String,

    /// Mock HTTP server standing in for the content store
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Start a mock content store server with no endpoints.
    pub async fn new() -> Self {
        let server = Server::new_async().await;

        Self {
            project_id: TEST_PROJECT_ID.to_string(),
            dataset: TEST_DATASET.to_string(),
            api_version: TEST_API_VERSION.to_string(),
            server,
            mocks: Vec::new(),
        }
    }

    /// Base URL of the mock server, used as the content store API host.
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Register an additional mock endpoint after the context was built.
    pub fn mock<F>(&mut self, setup: F)
    where
        F: FnOnce(&mut ServerGuard) -> Mock,
    {
        let mock = setup(&mut self.server);
        self.mocks.push(mock);
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
