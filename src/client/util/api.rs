//! Requests to the game guides API.
//!
//! Each function performs a single request. An absent document (404) is `Ok(None)` so pages
//! can tell "no such slug" apart from a failed request.

#[cfg(feature = "web")]
use serde::de::DeserializeOwned;

#[cfg(feature = "web")]
use crate::model::{
    featured::FeaturedContent,
    game::{GameDetail, GameSummary},
    mission::MissionDetail,
};

#[cfg(feature = "web")]
pub async fn get_featured_content() -> Result<FeaturedContent, String> {
    get_json::<FeaturedContent>("/api/featured")
        .await
        .map(Option::unwrap_or_default)
}

#[cfg(feature = "web")]
pub async fn list_games() -> Result<Vec<GameSummary>, String> {
    get_json::<Vec<GameSummary>>("/api/games")
        .await
        .map(Option::unwrap_or_default)
}

#[cfg(feature = "web")]
pub async fn get_game(slug: &str) -> Result<Option<GameDetail>, String> {
    get_json(&format!("/api/games/{}", slug)).await
}

#[cfg(feature = "web")]
pub async fn get_mission(slug: &str) -> Result<Option<MissionDetail>, String> {
    get_json(&format!("/api/missions/{}", slug)).await
}

#[cfg(feature = "web")]
async fn get_json<T: DeserializeOwned>(path: &str) -> Result<Option<T>, String> {
    use reqwasm::http::Request;

    let response = Request::get(path)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => {
            let body = response
                .json::<T>()
                .await
                .map_err(|e| format!("Failed to parse response from {}: {}", path, e))?;
            Ok(Some(body))
        }
        404 => Ok(None),
        _ => {
            use crate::model::api::ErrorDto;

            if let Ok(error_dto) = response.json::<ErrorDto>().await {
                Err(format!(
                    "Request failed with status {}: {}",
                    response.status(),
                    error_dto.error
                ))
            } else {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(format!(
                    "Request failed with status {}: {}",
                    response.status(),
                    error_text
                ))
            }
        }
    }
}
