#![allow(non_snake_case)]

mod client;
mod model;

#[cfg(feature = "server")]
use game_guides::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::{Config, ContentSource},
            model::app::AppState,
            startup,
        };

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        match &config.content_source {
            ContentSource::Sanity(sanity) => tracing::info!(
                "Serving content from project {} dataset {} ({})",
                sanity.project_id,
                sanity.dataset,
                if sanity.use_cdn { "CDN" } else { "live API" }
            ),
            ContentSource::Fallback { .. } => {
                tracing::info!("Serving content from the built-in Hitman 3 dataset")
            }
        }

        let content = match startup::build_query_client(&config) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Failed to set up content store: {}", e);
                std::process::exit(1);
            }
        };

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes().with_state(AppState { content });
        router = router.merge(server_routes);

        Ok(router)
    })
}
