use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        game::{GameDetail, GameSummary},
    },
    server::{
        error::{content::ContentError, Error},
        model::app::AppState,
    },
};

pub static GAME_TAG: &str = "game";

/// List published games ordered by name
#[utoipa::path(
    get,
    path = "/api/games",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "Published games", body = Vec<GameSummary>),
        (status = 502, description = "Content store query failed", body = ErrorDto),
    ),
)]
pub async fn list_games(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let games = state.content.list_games().await?;

    Ok((StatusCode::OK, Json(games)))
}

/// Get a game with its missions and published guides
#[utoipa::path(
    get,
    path = "/api/games/{slug}",
    tag = GAME_TAG,
    params(("slug" = String, Path, description = "Game slug")),
    responses(
        (status = 200, description = "Game found", body = GameDetail),
        (status = 404, description = "No game has this slug", body = ErrorDto),
        (status = 502, description = "Content store query failed", body = ErrorDto),
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let Some(game) = state.content.get_game_by_slug(&slug).await? else {
        return Err(ContentError::GameNotFound(slug).into());
    };

    Ok((StatusCode::OK, Json(game)))
}
