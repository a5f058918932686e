use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        fallback::{FallbackMission, FallbackRecord, RecordKind},
        mission::{Challenge, ChallengeType, MissionDifficulty, Opportunity, OpportunityDifficulty},
    },
    server::{
        error::{content::ContentError, Error},
        fallback::FallbackIndex,
    },
};

pub static FALLBACK_TAG: &str = "fallback";

/// Query parameters of the fallback mission list.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MissionFilter {
    /// Only missions of this difficulty
    pub difficulty: Option<MissionDifficulty>,
}

/// Query parameters of the fallback challenge list.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ChallengeFilter {
    /// Only challenges of this type
    #[serde(rename = "type")]
    pub challenge_type: ChallengeType,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OpportunityFilter {
    /// Only opportunities of this difficulty
    pub difficulty: OpportunityDifficulty,
}

/// List missions of the built-in Hitman 3 dataset
#[utoipa::path(
    get,
    path = "/api/fallback/missions",
    tag = FALLBACK_TAG,
    params(MissionFilter),
    responses(
        (status = 200, description = "Fallback missions, optionally filtered by difficulty", body = Vec<FallbackMission>),
    ),
)]
pub async fn list_missions(Query(filter): Query<MissionFilter>) -> impl IntoResponse {
    let index = FallbackIndex::global();

    let missions: Vec<FallbackMission> = match filter.difficulty {
        Some(difficulty) => index
            .missions_by_difficulty(difficulty)
            .into_iter()
            .cloned()
            .collect(),
        None => index.missions().to_vec(),
    };

    (StatusCode::OK, Json(missions))
}

/// Get one record of the built-in dataset by kind and ID
///
/// Mastery unlocks are looked up by unlock name instead of ID.
#[utoipa::path(
    get,
    path = "/api/fallback/{kind}/{id}",
    tag = FALLBACK_TAG,
    params(
        ("kind" = RecordKind, Path, description = "Record kind, e.g. target or starting-location"),
        ("id" = String, Path, description = "Record ID"),
    ),
    responses(
        (status = 200, description = "Record found", body = FallbackRecord),
        (status = 400, description = "Unknown record kind", body = ErrorDto),
        (status = 404, description = "No record of this kind has this ID", body = ErrorDto),
    ),
)]
pub async fn get_record(Path((kind, id)): Path<(String, String)>) -> Result<impl IntoResponse, Error> {
    let kind = RecordKind::ALL
        .into_iter()
        .find(|k| k.as_str() == kind)
        .ok_or_else(|| Error::ParseError(format!("Unknown record kind {:?}", kind)))?;

    let Some(record) = FallbackIndex::global().get_by_id(kind, &id) else {
        return Err(ContentError::FallbackRecordNotFound {
            kind: kind.to_string(),
            id,
        }
        .into());
    };

    Ok((StatusCode::OK, Json(record.to_owned_record())))
}

/// List challenges of one type across every fallback mission
#[utoipa::path(
    get,
    path = "/api/fallback/challenges",
    tag = FALLBACK_TAG,
    params(ChallengeFilter),
    responses(
        (status = 200, description = "Matching challenges", body = Vec<Challenge>),
    ),
)]
pub async fn list_challenges(Query(filter): Query<ChallengeFilter>) -> impl IntoResponse {
    let challenges: Vec<Challenge> = FallbackIndex::global()
        .challenges_by_type(filter.challenge_type)
        .into_iter()
        .cloned()
        .collect();

    (StatusCode::OK, Json(challenges))
}

/// List opportunities of one difficulty across every fallback mission
#[utoipa::path(
    get,
    path = "/api/fallback/opportunities",
    tag = FALLBACK_TAG,
    params(OpportunityFilter),
    responses(
        (status = 200, description = "Matching opportunities", body = Vec<Opportunity>),
    ),
)]
pub async fn list_opportunities(Query(filter): Query<OpportunityFilter>) -> impl IntoResponse {
    let opportunities: Vec<Opportunity> = FallbackIndex::global()
        .opportunities_by_difficulty(filter.difficulty)
        .into_iter()
        .cloned()
        .collect();

    (StatusCode::OK, Json(opportunities))
}
