//! Tests for the guide endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use game_guides::server::controller::guide::{get_guide, list_guides};
use serde_json::json;

use super::*;

/// Expected: 200 OK with the guides as returned by the store
#[tokio::test]
async fn list_guides_returns_items() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_query_endpoint(
            json!([
                factory::guide_list_item("guide-2", "Sniper Only", "sniper-only", "2024-03-12T12:00:00Z"),
                factory::guide_list_item("guide-1", "Silent Assassin", "silent-assassin", "2024-03-10T12:00:00Z"),
            ]),
            1,
        )
        .build()
        .await?;

    let resp = list_guides(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(body[0]["slug"]["current"], "sniper-only");
    test.assert_mocks();

    Ok(())
}

/// Expected: 200 OK with the guide body
#[tokio::test]
async fn get_guide_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_slug_query_endpoint("silent-assassin", factory::guide_detail("silent-assassin"), 1)
        .build()
        .await?;

    let resp = get_guide(
        State(test.into_app_state()),
        Path("silent-assassin".to_string()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    assert_eq!(body["slug"]["current"], "silent-assassin");
    test.assert_mocks();

    Ok(())
}

/// Expected: 404 Not Found for a draft, which the published-only query never returns
#[tokio::test]
async fn get_guide_draft_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_slug_query_endpoint("work-in-progress", serde_json::Value::Null, 1)
        .build()
        .await?;

    let resp = get_guide(
        State(test.into_app_state()),
        Path("work-in-progress".to_string()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    test.assert_mocks();

    Ok(())
}

/// Expected: 502 Bad Gateway when the store answers with an error
#[tokio::test]
async fn get_guide_store_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint(503, "Service unavailable", 1)
        .build()
        .await?;

    let resp = get_guide(
        State(test.into_app_state()),
        Path("silent-assassin".to_string()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    test.assert_mocks();

    Ok(())
}
