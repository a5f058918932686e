//! Tests for the game endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use game_guides::server::controller::game::{get_game, list_games};

use super::*;

/// Expected: 200 OK with the games in the order the store returned them
#[tokio::test]
async fn list_games_returns_summaries() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_query_endpoint(factory::game_summaries(), 1)
        .build()
        .await?;

    let result = list_games(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    assert_eq!(body[0]["name"], "Blood Money");
    assert_eq!(body[1]["slug"]["current"], "hitman-3");
    test.assert_mocks();

    Ok(())
}

/// Expected: 200 OK with an empty array when no games are published
#[tokio::test]
async fn list_games_empty() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_query_endpoint(serde_json::json!([]), 1)
        .build()
        .await?;

    let resp = list_games(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await?, serde_json::json!([]));

    Ok(())
}

/// Expected: 502 Bad Gateway when the store rejects the query
#[tokio::test]
async fn list_games_store_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint(500, "Internal error", 1)
        .build()
        .await?;

    let result = list_games(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = json_body(resp).await?;
    assert!(body["error"].is_string());
    test.assert_mocks();

    Ok(())
}

/// Expected: 200 OK with missions and guides
#[tokio::test]
async fn get_game_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_slug_query_endpoint("hitman-3", factory::game_detail("hitman-3"), 1)
        .build()
        .await?;

    let resp = get_game(State(test.into_app_state()), Path("hitman-3".to_string()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    assert_eq!(body["slug"]["current"], "hitman-3");
    assert!(body["missions"].is_array());
    test.assert_mocks();

    Ok(())
}

/// Expected: 404 Not Found when the store has no game with the slug
#[tokio::test]
async fn get_game_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_slug_query_endpoint("hitman-4", serde_json::Value::Null, 1)
        .build()
        .await?;

    let result = get_game(State(test.into_app_state()), Path("hitman-4".to_string())).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    test.assert_mocks();

    Ok(())
}
