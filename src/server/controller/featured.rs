use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, featured::FeaturedContent},
    server::{error::Error, model::app::AppState},
};

pub static FEATURED_TAG: &str = "featured";

/// Get the home page slices: featured games, featured guides, and recent guides
#[utoipa::path(
    get,
    path = "/api/featured",
    tag = FEATURED_TAG,
    responses(
        (status = 200, description = "Home page content, any slice may be empty", body = FeaturedContent),
        (status = 502, description = "Content store query failed", body = ErrorDto),
    ),
)]
pub async fn get_featured(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let featured = state.content.get_featured_content().await?;

    Ok((StatusCode::OK, Json(featured)))
}
