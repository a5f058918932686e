use std::sync::Arc;

use crate::{
    model::image::ImageUrlBuilder,
    server::{
        config::{Config, ContentSource},
        content::{sanity::SanityStore, QueryClient},
        error::Error,
        fallback::FallbackIndex,
    },
};

/// Build the query client for the configured content source
pub fn build_query_client(config: &Config) -> Result<QueryClient, Error> {
    let client = match &config.content_source {
        ContentSource::Sanity(sanity) => {
            let images = ImageUrlBuilder::new(&sanity.project_id, &sanity.dataset);
            let store = SanityStore::new(sanity.clone())?;

            QueryClient::new(Arc::new(store), images)
        }
        ContentSource::Fallback {
            image_project_id,
            image_dataset,
        } => {
            let store = Arc::new(FallbackIndex::global().to_memory_store());

            match image_project_id {
                Some(project_id) => {
                    QueryClient::new(store, ImageUrlBuilder::new(project_id, image_dataset))
                }
                None => QueryClient::without_images(store),
            }
        }
    };

    Ok(client)
}
