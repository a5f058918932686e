//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring the mock content store before a
//! test runs. Endpoints are queued by the builder methods and registered during `build()`.

use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()` to create a
/// [`TestContext`] whose mock server answers the configured queries.
pub struct TestBuilder {
    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    query_endpoints: Vec<(Value, usize)>, // (result, expected_requests)
    slug_query_endpoints: Vec<(String, Value, usize)>, // (slug, result, expected_requests)
    authorized_query_endpoints: Vec<(String, Value, usize)>, // (token, result, expected_requests)
    error_endpoints: Vec<(usize, String, usize)>, // (status, description, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder with no mock endpoints configured.
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            query_endpoints: Vec::new(),
            slug_query_endpoints: Vec::new(),
            authorized_query_endpoints: Vec::new(),
            error_endpoints: Vec::new(),
        }
    }

    /// Add a query endpoint answering any query with `result`.
    ///
    /// # Arguments
    /// - `result` - Value returned in the response's `result` field
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_query_endpoint(mut self, result: Value, expected_requests: usize) -> Self {
        self.query_endpoints.push((result, expected_requests));
        self
    }

    /// Add a query endpoint answering queries bound to `slug`.
    ///
    /// Pass `Value::Null` as `result` to simulate a slug with no matching document.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_slug_query_endpoint(
        mut self,
        slug: impl Into<String>,
        result: Value,
        expected_requests: usize,
    ) -> Self {
        self.slug_query_endpoints
            .push((slug.into(), result, expected_requests));
        self
    }

    /// Add a query endpoint that requires `token` as a bearer token.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_authorized_query_endpoint(
        mut self,
        token: impl Into<String>,
        result: Value,
        expected_requests: usize,
    ) -> Self {
        self.authorized_query_endpoints
            .push((token.into(), result, expected_requests));
        self
    }

    /// Add a query endpoint failing with `status` and the store's error body.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_error_endpoint(
        mut self,
        status: usize,
        description: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.error_endpoints
            .push((status, description.into(), expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context by starting the mock server and creating all endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await;

        // Note: Custom endpoints are created first to allow proper sequential mockito matching
        // when tests need to create multiple mocks for the same path (e.g., error then success)
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (slug, result, expected) in self.slug_query_endpoints {
            mocks.push(
                setup
                    .content()
                    .create_slug_query_endpoint(&slug, result, expected),
            );
        }

        for (token, result, expected) in self.authorized_query_endpoints {
            mocks.push(
                setup
                    .content()
                    .create_authorized_query_endpoint(&token, result, expected),
            );
        }

        for (result, expected) in self.query_endpoints {
            mocks.push(setup.content().create_query_endpoint(result, expected));
        }

        for (status, description, expected) in self.error_endpoints {
            mocks.push(
                setup
                    .content()
                    .create_error_endpoint(status, &description, expected),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks.extend(mocks);

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
