//! Tests for the mission endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use game_guides::server::controller::mission::get_mission;

use super::*;

/// Expected: 200 OK with every reference list present
#[tokio::test]
async fn get_mission_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_slug_query_endpoint(
            "on-top-of-the-world",
            factory::mission_detail("on-top-of-the-world"),
            1,
        )
        .build()
        .await?;

    let resp = get_mission(
        State(test.into_app_state()),
        Path("on-top-of-the-world".to_string()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    assert_eq!(body["slug"]["current"], "on-top-of-the-world");
    for field in ["targets", "disguises", "weapons", "opportunities", "challenges"] {
        assert!(body[field].is_array(), "{} should be an array", field);
    }
    test.assert_mocks();

    Ok(())
}

/// Expected: 404 Not Found for an unknown slug
#[tokio::test]
async fn get_mission_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_slug_query_endpoint("nowhere", serde_json::Value::Null, 1)
        .build()
        .await?;

    let resp = get_mission(State(test.into_app_state()), Path("nowhere".to_string()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await?;
    assert!(body["error"].as_str().unwrap().contains("nowhere"));

    Ok(())
}
