//! Tests for the fallback filters
//!
//! Filters walk the missions in dataset order and keep the order of records within each
//! mission.

use crate::{
    model::mission::{ChallengeType, MissionDifficulty, OpportunityDifficulty},
    server::fallback::FallbackIndex,
};

#[test]
fn missions_by_difficulty_preserves_order() {
    let index = FallbackIndex::global();

    let professional: Vec<&str> = index
        .missions_by_difficulty(MissionDifficulty::Professional)
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    let novice = index.missions_by_difficulty(MissionDifficulty::Novice);

    assert_eq!(professional, vec!["sapienza", "dubai", "dartmoor"]);
    assert_eq!(novice.len(), 1);
    assert!(index
        .missions_by_difficulty(MissionDifficulty::Master)
        .is_empty());
}

#[test]
fn challenges_by_type_spans_missions() {
    let index = FallbackIndex::global();

    let classics: Vec<&str> = index
        .challenges_by_type(ChallengeType::Classics)
        .iter()
        .map(|c| c.id.as_str())
        .collect();

    assert_eq!(
        classics,
        vec![
            "silent_assassin",
            "silent_assassin_sapienza",
            "silent_assassin_dubai",
            "silent_assassin_dartmoor"
        ]
    );
    assert!(index.challenges_by_type(ChallengeType::Targets).is_empty());
}

#[test]
fn opportunities_by_difficulty_spans_missions() {
    let index = FallbackIndex::global();

    let hard: Vec<&str> = index
        .opportunities_by_difficulty(OpportunityDifficulty::Hard)
        .iter()
        .map(|o| o.id.as_str())
        .collect();

    assert_eq!(
        hard,
        vec![
            "bare_knuckle_boxer",
            "pest_control",
            "how_the_mighty_fall",
            "means_motive_and_opportunity"
        ]
    );
    assert!(index
        .opportunities_by_difficulty(OpportunityDifficulty::Easy)
        .is_empty());
}
