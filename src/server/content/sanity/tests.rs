//! Tests for SanityStore
//!
//! These tests verify the hosted store backend against a mock query endpoint:
//! - Decoding each query's `result` into its view model
//! - Binding `$slug` and treating a `null` result as absent
//! - Sending the read token as a bearer token
//! - Always reading through the published perspective
//! - Mapping non-success statuses and malformed bodies to store errors
//! - Choosing the CDN or live API host

use game_guides_test_utils::prelude::*;
use mockito::Matcher;
use serde_json::json;

use crate::{
    model::mission::MasteryUnlockType,
    server::{
        content::{
            sanity::{SanityConfig, SanityStore},
            ContentStore,
        },
        error::retrieval::StoreError,
    },
};

fn store(test: &TestContext, token: Option<&str>) -> SanityStore {
    let config = SanityConfig {
        project_id: test.project_id.clone(),
        dataset: test.dataset.clone(),
        api_version: test.api_version.clone(),
        token: token.map(str::to_string),
        use_cdn: false,
        api_host: Some(test.url()),
    };

    SanityStore::new(config).expect("Failed to build store")
}

#[tokio::test]
async fn test_list_games_decodes_result() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_query_endpoint(factory::game_summaries(), 1)
        .build()
        .await?;
    let store = store(&test, None);

    let games = store.list_games().await.expect("Failed to list games");

    assert_eq!(games.len(), 2);
    assert_eq!(games[1].slug.as_str(), "hitman-3");
    assert_eq!(games[1].mission_count, 6);
    assert_eq!(
        games[1].release_date,
        chrono::NaiveDate::from_ymd_opt(2021, 1, 20)
    );
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn test_game_by_slug_binds_slug() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_slug_query_endpoint("hitman-3", factory::game_detail("hitman-3"), 1)
        .build()
        .await?;
    let store = store(&test, None);

    let game = store
        .game_by_slug("hitman-3")
        .await
        .expect("Failed to get game")
        .expect("Game should exist");

    assert_eq!(game.missions.len(), 1);
    assert_eq!(game.guides[0].author.as_ref().unwrap().name, "Agent Diana");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn test_null_result_is_absent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_slug_query_endpoint("no-such-guide", serde_json::Value::Null, 1)
        .build()
        .await?;
    let store = store(&test, None);

    let guide = store
        .guide_by_slug("no-such-guide")
        .await
        .expect("Failed to get guide");

    assert!(guide.is_none());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn test_slug_with_quotes_is_json_encoded() -> Result<(), TestError> {
    let slug = r#"a "quoted" slug"#;
    let test = TestBuilder::new()
        .with_slug_query_endpoint(slug, serde_json::Value::Null, 1)
        .build()
        .await?;
    let store = store(&test, None);

    let mission = store
        .mission_by_slug(slug)
        .await
        .expect("Failed to get mission");

    assert!(mission.is_none());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn test_mission_by_slug_decodes_null_lists() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_slug_query_endpoint("the-showstopper", factory::mission_detail("the-showstopper"), 1)
        .build()
        .await?;
    let store = store(&test, None);

    let mission = store
        .mission_by_slug("the-showstopper")
        .await
        .expect("Failed to get mission")
        .expect("Mission should exist");

    assert_eq!(mission.targets[0].routines[0].duration, 300);
    assert!(mission.disguises.is_empty());
    assert!(mission.starting_locations.is_empty());
    assert_eq!(
        mission.mastery_unlocks[0].unlock_type,
        MasteryUnlockType::StartingLocation
    );
    assert_eq!(mission.walkthrough.map(|w| w.len()), Some(1));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn test_featured_content_decodes_slices() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_query_endpoint(factory::featured_content(), 1)
        .build()
        .await?;
    let store = store(&test, None);

    let featured = store
        .featured_content()
        .await
        .expect("Failed to get featured content");

    assert_eq!(featured.featured_games[0].mission_count, 6);
    assert_eq!(featured.featured_guides.len(), 1);
    assert_eq!(featured.recent_guides[0].slug.as_str(), "beginner-tips");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn test_sends_token_as_bearer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_authorized_query_endpoint(
            game_guides_test_utils::constant::TEST_API_TOKEN,
            json!([]),
            1,
        )
        .build()
        .await?;
    let store = store(
        &test,
        Some(game_guides_test_utils::constant::TEST_API_TOKEN),
    );

    let guides = store.list_guides().await.expect("Failed to list guides");

    assert!(guides.is_empty());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn test_authorized_queries_read_published_perspective() -> Result<(), TestError> {
    let token = game_guides_test_utils::constant::TEST_API_TOKEN;
    let test = TestBuilder::new()
        .with_mock_endpoint(move |server| {
            server
                .mock("GET", Matcher::Any)
                .match_query(Matcher::UrlEncoded(
                    "perspective".to_string(),
                    "published".to_string(),
                ))
                .match_header("authorization", format!("Bearer {}", token).as_str())
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(json!({ "result": factory::game_summaries() }).to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let store = store(&test, Some(token));

    let games = store.list_games().await.expect("Failed to list games");

    assert_eq!(games.len(), 2);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn test_slug_queries_read_published_perspective() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", Matcher::Any)
                .match_query(Matcher::AllOf(vec![
                    Matcher::UrlEncoded("perspective".to_string(), "published".to_string()),
                    Matcher::UrlEncoded("$slug".to_string(), "\"hitman-3\"".to_string()),
                ]))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(json!({ "result": null }).to_string())
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let store = store(&test, None);

    let game = store.game_by_slug("hitman-3").await.expect("Failed to get game");

    assert!(game.is_none());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn test_error_status_maps_to_status_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint(400, "Expected '}' following object body", 1)
        .build()
        .await?;
    let store = store(&test, None);

    let result = store.list_games().await;

    match result {
        Err(StoreError::Status { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Expected '}' following object body");
        }
        other => panic!("Expected status error, got {:?}", other),
    }
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn test_non_json_error_keeps_body() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    test.mock(|server| {
        server
            .mock("GET", Matcher::Any)
            .with_status(503)
            .with_body("upstream unavailable")
            .expect(1)
            .create()
    });
    let store = store(&test, None);

    let result = store.featured_content().await;

    assert!(matches!(
        result,
        Err(StoreError::Status { status: 503, ref message }) if message == "upstream unavailable"
    ));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn test_malformed_result_maps_to_decode_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_query_endpoint(json!([{ "_id": "game-1" }]), 1)
        .build()
        .await?;
    let store = store(&test, None);

    let result = store.list_games().await;

    assert!(matches!(result, Err(StoreError::Decode(_))));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn test_unreachable_host_maps_to_http_error() {
    let store = SanityStore::new(SanityConfig {
        project_id: "testproject".to_string(),
        dataset: "production".to_string(),
        api_version: "2024-01-01".to_string(),
        token: None,
        use_cdn: false,
        api_host: Some("http://127.0.0.1:1".to_string()),
    })
    .expect("Failed to build store");

    let result = store.list_guides().await;

    assert!(matches!(result, Err(StoreError::Http(_))));
}

#[test]
fn test_cdn_toggle_selects_host() {
    let mut config = SanityConfig {
        project_id: "abc123".to_string(),
        dataset: "production".to_string(),
        api_version: "2024-01-01".to_string(),
        token: None,
        use_cdn: true,
        api_host: None,
    };

    assert_eq!(
        config.query_url(),
        "https://abc123.apicdn.sanity.io/v2024-01-01/data/query/production"
    );

    config.use_cdn = false;
    assert_eq!(config.base_url(), "https://abc123.api.sanity.io");

    config.api_host = Some("http://localhost:4000/".to_string());
    assert_eq!(
        config.query_url(),
        "http://localhost:4000/v2024-01-01/data/query/production"
    );
}
