//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/games` - Published games ordered by name
/// - `GET /api/games/{slug}` - Game with missions and guides
/// - `GET /api/missions/{slug}` - Mission with every reference expanded
/// - `GET /api/guides` - Published guides, newest first
/// - `GET /api/guides/{slug}` - Published guide with body and author
/// - `GET /api/featured` - Home page slices
/// - `GET /api/images/{asset_ref}` - Redirect to the image CDN
/// - `GET /api/fallback/missions` - Built-in Hitman 3 missions
/// - `GET /api/fallback/{kind}/{id}` - Built-in dataset record lookup
/// - `GET /api/fallback/challenges` - Built-in challenges by type
/// - `GET /api/fallback/opportunities` - Built-in opportunities by difficulty
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and browsable through
/// Swagger UI at `/api/docs`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { content });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Game Guides", description = "Game guides content API"), tags(
        (name = controller::game::GAME_TAG, description = "Game API routes"),
        (name = controller::mission::MISSION_TAG, description = "Mission API routes"),
        (name = controller::guide::GUIDE_TAG, description = "Guide API routes"),
        (name = controller::featured::FEATURED_TAG, description = "Home page content"),
        (name = controller::image::IMAGE_TAG, description = "Image CDN redirects"),
        (name = controller::fallback::FALLBACK_TAG, description = "Built-in Hitman 3 dataset"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::game::list_games))
        .routes(routes!(controller::game::get_game))
        .routes(routes!(controller::mission::get_mission))
        .routes(routes!(controller::guide::list_guides))
        .routes(routes!(controller::guide::get_guide))
        .routes(routes!(controller::featured::get_featured))
        .routes(routes!(controller::image::get_image))
        .routes(routes!(controller::fallback::list_missions))
        .routes(routes!(controller::fallback::get_record))
        .routes(routes!(controller::fallback::list_challenges))
        .routes(routes!(controller::fallback::list_opportunities))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
