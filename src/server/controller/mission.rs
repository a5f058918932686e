use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, mission::MissionDetail},
    server::{
        error::{content::ContentError, Error},
        model::app::AppState,
    },
};

pub static MISSION_TAG: &str = "mission";

/// Get a mission with targets, disguises, weapons, opportunities, challenges, mastery
/// unlocks, and starting locations expanded
#[utoipa::path(
    get,
    path = "/api/missions/{slug}",
    tag = MISSION_TAG,
    params(("slug" = String, Path, description = "Mission slug")),
    responses(
        (status = 200, description = "Mission found", body = MissionDetail),
        (status = 404, description = "No mission has this slug", body = ErrorDto),
        (status = 502, description = "Content store query failed", body = ErrorDto),
    ),
)]
pub async fn get_mission(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let Some(mission) = state.content.get_mission_by_slug(&slug).await? else {
        return Err(ContentError::MissionNotFound(slug).into());
    };

    Ok((StatusCode::OK, Json(mission)))
}
