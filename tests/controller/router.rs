//! Tests for the assembled router.
//!
//! Requests go through the full route table, so path parameters, query strings, and the
//! OpenAPI document are exercised the way a browser would hit them.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use game_guides::server::router::routes;
use tower::ServiceExt;

use super::*;

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

/// Expected: 200 OK with a document listing the content paths
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.into_app_state());

    let resp = app.oneshot(get("/api/docs/openapi.json")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    for path in ["/api/games", "/api/games/{slug}", "/api/featured", "/api/fallback/{kind}/{id}"] {
        assert!(body["paths"][path].is_object(), "{} should be documented", path);
    }

    Ok(())
}

/// Expected: 200 OK with the game the slug query returned
#[tokio::test]
async fn routes_game_slug() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_slug_query_endpoint("hitman-3", factory::game_detail("hitman-3"), 1)
        .build()
        .await?;
    let app = routes().with_state(test.into_app_state());

    let resp = app.oneshot(get("/api/games/hitman-3")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    test.assert_mocks();

    Ok(())
}

/// Expected: 200 OK with only Professional missions
#[tokio::test]
async fn routes_fallback_mission_filter() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.into_app_state());

    let resp = app
        .oneshot(get("/api/fallback/missions?difficulty=Professional"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    assert_eq!(body.as_array().map(Vec::len), Some(3));

    Ok(())
}

/// Expected: 200 OK for a challenge type given as `type`
#[tokio::test]
async fn routes_fallback_challenge_filter() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.into_app_state());

    let resp = app
        .oneshot(get("/api/fallback/challenges?type=Discovery"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expected: 404 Not Found for an unknown fallback target
#[tokio::test]
async fn routes_fallback_record_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.into_app_state());

    let resp = app
        .oneshot(get("/api/fallback/target/agent_47"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
