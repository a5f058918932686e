//! Hosted content store backend.
//!
//! Sends the GROQ text of each query to the project's query endpoint and decodes the
//! `result` field of the response into the query's view model:
//!
//! ```text
//! GET {host}/v{api_version}/data/query/{dataset}?query=<GROQ>&perspective=published&$slug="<slug>"
//! ```
//!
//! The CDN host serves cached results with eventual consistency; the API host serves every
//! call live. Which one is used is fixed when the store is constructed.

use std::time::Duration;

use async_trait::async_trait;
use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    model::{
        featured::FeaturedContent,
        game::{GameDetail, GameSummary},
        guide::{GuideDetail, GuideListItem},
        mission::MissionDetail,
    },
    server::{
        content::{query::QueryName, ContentStore},
        error::retrieval::StoreError,
    },
};

#[cfg(test)]
mod tests;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const PUBLISHED_PERSPECTIVE: &str = "published";

/// Connection settings for the hosted content store.
#[derive(Clone, Debug, PartialEq)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    /// Date-based API version, e.g. `2024-01-01`
    pub api_version: String,
    pub token: Option<String>,
    pub use_cdn: bool,
    /// Replaces the project host, e.g. to point at a proxy or a mock server.
    pub api_host: Option<String>,
}

impl SanityConfig {
    /// Base URL queries are sent to, without a trailing slash.
    pub fn base_url(&self) -> String {
        if let Some(host) = &self.api_host {
            return host.trim_end_matches('/').to_string();
        }

        let subdomain = if self.use_cdn { "apicdn" } else { "api" };

        format!("https://{}.{}.sanity.io", self.project_id, subdomain)
    }

    pub fn query_url(&self) -> String {
        format!(
            "{}/v{}/data/query/{}",
            self.base_url(),
            self.api_version.trim_start_matches('v'),
            self.dataset
        )
    }
}

#[derive(Deserialize)]
struct QueryResponse<T> {
    result: T,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    description: String,
}

/// Content store reached over HTTPS.
pub struct SanityStore {
    config: SanityConfig,
    http: reqwest::Client,
}

impl SanityStore {
    /// Creates a store sharing a single connection pool across all queries.
    ///
    /// # Returns
    /// - `Ok(SanityStore)` - Store ready to send queries
    /// - `Err(StoreError::Http)` - The HTTP client could not be built
    pub fn new(config: SanityConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("game-guides/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { config, http })
    }

    /// Settings the store was created with.
    pub fn config(&self) -> &SanityConfig {
        &self.config
    }

    /// Sends a query and decodes the `result` field of the response.
    ///
    /// # Arguments
    /// - `query` - Query from the catalog to send
    /// - `slug` - Value bound to `$slug`, JSON-encoded as the query API expects
    ///
    /// # Returns
    /// - `Ok(T)` - Decoded result; `null` decodes into `None` for optional results
    /// - `Err(StoreError::Http)` - Request failed to send or the body could not be read
    /// - `Err(StoreError::Status)` - Store answered with a non-success status
    /// - `Err(StoreError::Decode)` - Body did not match the view model
    async fn fetch<T: DeserializeOwned>(
        &self,
        query: QueryName,
        slug: Option<&str>,
    ) -> Result<T, StoreError> {
        // Without an explicit perspective, older API versions answer authorized requests with
        // `drafts.*` documents alongside published ones.
        let mut params = vec![
            ("query", query.groq().to_string()),
            ("perspective", PUBLISHED_PERSPECTIVE.to_string()),
        ];
        if let Some(slug) = slug {
            params.push(("$slug", serde_json::to_string(slug)?));
        }

        let mut request = self.http.get(self.config.query_url()).query(&params);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        tracing::debug!(query = %query, slug = ?slug, cdn = self.config.use_cdn, "Sending content query");

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.description)
                .unwrap_or(body);

            return Err(StoreError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let response: QueryResponse<T> = serde_json::from_str(&body)?;

        Ok(response.result)
    }
}

#[async_trait]
impl ContentStore for SanityStore {
    async fn list_games(&self) -> Result<Vec<GameSummary>, StoreError> {
        self.fetch(QueryName::ListGames, None).await
    }

    async fn game_by_slug(&self, slug: &str) -> Result<Option<GameDetail>, StoreError> {
        self.fetch(QueryName::GameBySlug, Some(slug)).await
    }

    async fn mission_by_slug(&self, slug: &str) -> Result<Option<MissionDetail>, StoreError> {
        self.fetch(QueryName::MissionBySlug, Some(slug)).await
    }

    async fn list_guides(&self) -> Result<Vec<GuideListItem>, StoreError> {
        self.fetch(QueryName::ListGuides, None).await
    }

    async fn guide_by_slug(&self, slug: &str) -> Result<Option<GuideDetail>, StoreError> {
        self.fetch(QueryName::GuideBySlug, Some(slug)).await
    }

    async fn featured_content(&self) -> Result<FeaturedContent, StoreError> {
        self.fetch(QueryName::FeaturedContent, None).await
    }
}
