//! Content retrieval layer.
//!
//! [`QueryClient`] is the single entry point pages and controllers use to read content. It
//! delegates every named query to a [`ContentStore`] backend:
//!
//! - [`sanity::SanityStore`] sends the GROQ text from [`query`] to the hosted content store
//! - [`memory::MemoryStore`] evaluates the same join specifications over in-memory documents,
//!   used when no hosted store is configured and as the backend for tests
//!
//! Stores only read. Aggregates such as `missionCount` are computed by the store on every
//! call and never cached by the client.

pub mod client;
pub mod memory;
pub mod query;
pub mod sanity;

use async_trait::async_trait;

pub use client::QueryClient;

use crate::{
    model::{
        featured::FeaturedContent,
        game::{GameDetail, GameSummary},
        guide::{GuideDetail, GuideListItem},
        mission::MissionDetail,
    },
    server::error::retrieval::StoreError,
};

/// Backend able to answer every query in the catalog.
///
/// Slug lookups return `Ok(None)` when nothing matches; any string is a valid slug.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Published games ordered by name, each with its mission count.
    async fn list_games(&self) -> Result<Vec<GameSummary>, StoreError>;

    /// Non-archived game with its missions (by name) and published guides (newest first).
    async fn game_by_slug(&self, slug: &str) -> Result<Option<GameDetail>, StoreError>;

    /// Mission with every reference list expanded into embedded records.
    async fn mission_by_slug(&self, slug: &str) -> Result<Option<MissionDetail>, StoreError>;

    /// Published guides, newest first.
    async fn list_guides(&self) -> Result<Vec<GuideListItem>, StoreError>;

    /// Published guide with content, game, mission, and author profile.
    async fn guide_by_slug(&self, slug: &str) -> Result<Option<GuideDetail>, StoreError>;

    /// Home page slices, each computed independently.
    async fn featured_content(&self) -> Result<FeaturedContent, StoreError>;
}
