use std::sync::Arc;

use dioxus_logger::tracing;

use crate::{
    model::{
        featured::FeaturedContent,
        game::{GameDetail, GameSummary},
        guide::{GuideDetail, GuideListItem},
        image::{ImageRef, ImageUrlBuilder},
        mission::MissionDetail,
    },
    server::{
        content::{query::QueryName, ContentStore},
        error::retrieval::{RetrievalError, StoreError},
    },
};

/// Read-only client for the content store.
///
/// Cheap to clone; clones share the same store backend and connection pool.
#[derive(Clone)]
pub struct QueryClient {
    store: Arc<dyn ContentStore>,
    images: Option<ImageUrlBuilder>,
}

impl QueryClient {
    /// Creates a new instance of QueryClient.
    ///
    /// # Arguments
    /// - `store` - Backend answering the query catalog
    /// - `images` - URL builder for the project's image CDN
    pub fn new(store: Arc<dyn ContentStore>, images: ImageUrlBuilder) -> Self {
        Self {
            store,
            images: Some(images),
        }
    }

    /// Creates a client with no image project; every image resolves to `None`.
    pub fn without_images(store: Arc<dyn ContentStore>) -> Self {
        Self {
            store,
            images: None,
        }
    }

    /// Retrieves all published games ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<GameSummary>)` - Published games, possibly empty
    /// - `Err(RetrievalError)` - Content store query failed
    pub async fn list_games(&self) -> Result<Vec<GameSummary>, RetrievalError> {
        let games = self
            .store
            .list_games()
            .await
            .map_err(|e| retrieval_error(QueryName::ListGames, e))?;

        tracing::debug!("Retrieved {} games", games.len());

        Ok(games)
    }

    /// Retrieves a non-archived game with its missions and published guides.
    ///
    /// # Arguments
    /// - `slug` - Game slug; any string is accepted
    ///
    /// # Returns
    /// - `Ok(Some(GameDetail))` - Game found
    /// - `Ok(None)` - No non-archived game has this slug
    /// - `Err(RetrievalError)` - Content store query failed
    pub async fn get_game_by_slug(&self, slug: &str) -> Result<Option<GameDetail>, RetrievalError> {
        self.store
            .game_by_slug(slug)
            .await
            .map_err(|e| retrieval_error(QueryName::GameBySlug, e))
    }

    /// Retrieves a mission with every reference list expanded.
    ///
    /// # Returns
    /// - `Ok(Some(MissionDetail))` - Mission found
    /// - `Ok(None)` - No mission has this slug
    /// - `Err(RetrievalError)` - Content store query failed
    pub async fn get_mission_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<MissionDetail>, RetrievalError> {
        self.store
            .mission_by_slug(slug)
            .await
            .map_err(|e| retrieval_error(QueryName::MissionBySlug, e))
    }

    /// Retrieves published guides, newest first.
    pub async fn list_guides(&self) -> Result<Vec<GuideListItem>, RetrievalError> {
        let guides = self
            .store
            .list_guides()
            .await
            .map_err(|e| retrieval_error(QueryName::ListGuides, e))?;

        tracing::debug!("Retrieved {} guides", guides.len());

        Ok(guides)
    }

    /// Retrieves a published guide. Drafts and archived guides are absent.
    pub async fn get_guide_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<GuideDetail>, RetrievalError> {
        self.store
            .guide_by_slug(slug)
            .await
            .map_err(|e| retrieval_error(QueryName::GuideBySlug, e))
    }

    /// Retrieves the home page slices.
    ///
    /// Any slice may be empty; the call itself only fails when the store does.
    pub async fn get_featured_content(&self) -> Result<FeaturedContent, RetrievalError> {
        let featured = self
            .store
            .featured_content()
            .await
            .map_err(|e| retrieval_error(QueryName::FeaturedContent, e))?;

        tracing::debug!(
            "Retrieved featured content: {} games, {} featured guides, {} recent guides",
            featured.featured_games.len(),
            featured.featured_guides.len(),
            featured.recent_guides.len()
        );

        Ok(featured)
    }

    /// Derives a CDN URL for an image reference without any network call.
    ///
    /// # Returns
    /// - `Some(String)` - URL, sized when `width` or `height` is given
    /// - `None` - The reference is not a well-formed image asset ID, or no image project
    ///   is configured
    pub fn resolve_image_url(
        &self,
        image: &ImageRef,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Option<String> {
        self.images.as_ref()?.url(image, width, height)
    }

    /// Like [`resolve_image_url`](Self::resolve_image_url) for a bare asset reference.
    pub fn resolve_asset_url(
        &self,
        reference: &str,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Option<String> {
        self.images.as_ref()?.asset_url(reference, width, height)
    }

    /// URL builder used by [`resolve_image_url`](Self::resolve_image_url), if an image
    /// project is configured.
    pub fn images(&self) -> Option<&ImageUrlBuilder> {
        self.images.as_ref()
    }
}

fn retrieval_error(query: QueryName, source: StoreError) -> RetrievalError {
    tracing::debug!("Content query {} failed: {}", query, source);

    RetrievalError::new(query, source)
}
