//! Test configuration constants for content store client setup.
//!
//! These values are placeholders pointing the client at the mock server, not real project
//! credentials.

/// Project ID used when building test content store configurations.
pub static TEST_PROJECT_ID: &str = "testproject";

/// Dataset queried by test content store clients.
pub static TEST_DATASET: &str = "production";

/// Query API version used by test content store clients.
pub static TEST_API_VERSION: &str = "2024-01-01";

/// Read token sent as a bearer token when a test enables authenticated reads.
pub static TEST_API_TOKEN: &str = "sk_test_read_token";

/// Path of the query endpoint for [`TEST_DATASET`] at [`TEST_API_VERSION`].
pub fn test_query_path() -> String {
    format!("/v{}/data/query/{}", TEST_API_VERSION, TEST_DATASET)
}
