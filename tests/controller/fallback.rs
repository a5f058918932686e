//! Tests for the built-in dataset endpoints.

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
};
use game_guides::{
    model::mission::{ChallengeType, MissionDifficulty, OpportunityDifficulty},
    server::controller::fallback::{
        get_record, list_challenges, list_missions, list_opportunities, ChallengeFilter,
        MissionFilter, OpportunityFilter,
    },
};

use super::*;

fn record_path(kind: &str, id: &str) -> Path<(String, String)> {
    Path((kind.to_string(), id.to_string()))
}

/// Expected: 200 OK with all four missions in dataset order
#[tokio::test]
async fn list_missions_unfiltered() -> Result<(), TestError> {
    let resp = list_missions(Query(MissionFilter { difficulty: None }))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|m| m["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["paris", "sapienza", "dubai", "dartmoor"]);

    Ok(())
}

/// Expected: 200 OK with only missions of the requested difficulty
#[tokio::test]
async fn list_missions_by_difficulty() -> Result<(), TestError> {
    let resp = list_missions(Query(MissionFilter {
        difficulty: Some(MissionDifficulty::Professional),
    }))
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    let missions = body.as_array().unwrap();
    assert_eq!(missions.len(), 3);
    for mission in missions {
        assert_eq!(mission["difficulty"], "Professional");
    }

    Ok(())
}

/// Expected: 200 OK with the target record itself
#[tokio::test]
async fn get_target_record() -> Result<(), TestError> {
    let resp = get_record(record_path("target", "viktor_novikov"))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    assert_eq!(body["_id"], "viktor_novikov");
    assert_eq!(body["name"], "Viktor Novikov");

    Ok(())
}

/// Expected: 200 OK for a starting location derived from a mastery unlock
#[tokio::test]
async fn get_starting_location_record() -> Result<(), TestError> {
    let resp = get_record(record_path("starting-location", "palace_staff_starting_location"))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    assert_eq!(body["availableDisguise"], "palace_staff");

    Ok(())
}

/// Expected: 404 Not Found for an ID that belongs to another kind
#[tokio::test]
async fn get_record_wrong_kind_not_found() -> Result<(), TestError> {
    let resp = get_record(record_path("weapon", "viktor_novikov"))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expected: 400 Bad Request for an unknown record kind
#[tokio::test]
async fn get_record_unknown_kind() -> Result<(), TestError> {
    let resp = get_record(record_path("vehicle", "anything"))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expected: 200 OK with only challenges of the requested type
#[tokio::test]
async fn list_challenges_by_type() -> Result<(), TestError> {
    let resp = list_challenges(Query(ChallengeFilter {
        challenge_type: ChallengeType::Assassination,
    }))
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    let challenges = body.as_array().unwrap();
    assert!(!challenges.is_empty());
    for challenge in challenges {
        assert_eq!(challenge["type"], "Assassination");
    }

    Ok(())
}

/// Expected: 200 OK with only opportunities of the requested difficulty
#[tokio::test]
async fn list_opportunities_by_difficulty() -> Result<(), TestError> {
    let resp = list_opportunities(Query(OpportunityFilter {
        difficulty: OpportunityDifficulty::Easy,
    }))
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    for opportunity in body.as_array().unwrap() {
        assert_eq!(opportunity["difficulty"], "Easy");
    }

    Ok(())
}
