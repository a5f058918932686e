//! Content store HTTP mock endpoint creation utilities.
//!
//! Every query goes to the same path, so endpoints are told apart by their query string:
//! slug lookups match on the JSON-encoded `$slug` parameter.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::{constant::test_query_path, fixtures::content::ContentFixtures};

fn query_body(result: &Value) -> String {
    json!({ "ms": 4, "query": "*", "result": result }).to_string()
}

impl<'a> ContentFixtures<'a> {
    /// Create a mock query endpoint answering any query with `result`.
    ///
    /// # Arguments
    /// - `result` - Value returned in the response's `result` field
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint that will be automatically verified
    pub fn create_query_endpoint(&mut self, result: Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", test_query_path().as_str())
            .match_query(Matcher::Regex("query=".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(query_body(&result))
            .expect(expected_requests)
            .create()
    }

    /// Create a mock query endpoint answering queries bound to `slug`.
    ///
    /// # Arguments
    /// - `slug` - Slug the request must carry as its `$slug` parameter
    /// - `result` - Value returned in the response's `result` field; `Value::Null` for absent
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_slug_query_endpoint(
        &mut self,
        slug: &str,
        result: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", test_query_path().as_str())
            .match_query(Matcher::AllOf(vec![
                Matcher::Regex("query=".to_string()),
                Matcher::UrlEncoded("$slug".to_string(), Value::from(slug).to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(query_body(&result))
            .expect(expected_requests)
            .create()
    }

    /// Create a mock query endpoint that only answers requests carrying `token`.
    pub fn create_authorized_query_endpoint(
        &mut self,
        token: &str,
        result: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", test_query_path().as_str())
            .match_query(Matcher::Any)
            .match_header("authorization", format!("Bearer {}", token).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(query_body(&result))
            .expect(expected_requests)
            .create()
    }

    /// Create a mock query endpoint failing with the store's error body.
    ///
    /// # Arguments
    /// - `status` - HTTP status to respond with
    /// - `description` - Value of `error.description` in the response body
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_error_endpoint(
        &mut self,
        status: usize,
        description: &str,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "error": {
                "description": description,
                "type": "queryParseError"
            }
        });

        self.setup
            .server
            .mock("GET", test_query_path().as_str())
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
