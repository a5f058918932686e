use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        guide::{GuideDetail, GuideListItem},
    },
    server::{
        error::{content::ContentError, Error},
        model::app::AppState,
    },
};

pub static GUIDE_TAG: &str = "guide";

/// List published guides, newest first
#[utoipa::path(
    get,
    path = "/api/guides",
    tag = GUIDE_TAG,
    responses(
        (status = 200, description = "Published guides", body = Vec<GuideListItem>),
        (status = 502, description = "Content store query failed", body = ErrorDto),
    ),
)]
pub async fn list_guides(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let guides = state.content.list_guides().await?;

    Ok((StatusCode::OK, Json(guides)))
}

/// Get a published guide with its body, author profile, game, and mission
///
/// Drafts and archived guides answer with 404.
#[utoipa::path(
    get,
    path = "/api/guides/{slug}",
    tag = GUIDE_TAG,
    params(("slug" = String, Path, description = "Guide slug")),
    responses(
        (status = 200, description = "Guide found", body = GuideDetail),
        (status = 404, description = "No published guide has this slug", body = ErrorDto),
        (status = 502, description = "Content store query failed", body = ErrorDto),
    ),
)]
pub async fn get_guide(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let Some(guide) = state.content.get_guide_by_slug(&slug).await? else {
        return Err(ContentError::GuideNotFound(slug).into());
    };

    Ok((StatusCode::OK, Json(guide)))
}
