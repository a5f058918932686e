//! Tests for the featured content endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use game_guides::server::controller::featured::get_featured;
use serde_json::json;

use super::*;

/// Expected: 200 OK with all three slices
#[tokio::test]
async fn get_featured_returns_slices() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_query_endpoint(factory::featured_content(), 1)
        .build()
        .await?;

    let resp = get_featured(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    assert!(body["featuredGames"].is_array());
    assert!(body["featuredGuides"].is_array());
    assert!(body["recentGuides"].is_array());
    test.assert_mocks();

    Ok(())
}

/// Expected: 200 OK with empty slices rather than an error
#[tokio::test]
async fn get_featured_empty_slices() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_query_endpoint(
            json!({ "featuredGames": [], "featuredGuides": [], "recentGuides": [] }),
            1,
        )
        .build()
        .await?;

    let resp = get_featured(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    assert_eq!(body["featuredGames"], json!([]));
    assert_eq!(body["recentGuides"], json!([]));

    Ok(())
}
