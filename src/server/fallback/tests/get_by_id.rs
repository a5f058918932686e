//! Tests for FallbackIndex::get_by_id and the typed getters

use crate::{
    model::fallback::{FallbackRecord, RecordKind},
    server::fallback::{data, FallbackIndex, Record},
};

#[test]
fn finds_target_by_id() {
    let index = FallbackIndex::global();

    let record = index.get_by_id(RecordKind::Target, "viktor_novikov");

    match record {
        Some(Record::Target(target)) => assert_eq!(target.name, "Viktor Novikov"),
        other => panic!("Expected target, got {:?}", other),
    }
}

#[test]
fn repeated_lookups_return_same_record() {
    let first = FallbackIndex::global().target("dalia_margolis").unwrap();
    let second = FallbackIndex::global().target("dalia_margolis").unwrap();

    assert!(std::ptr::eq(first, second));
}

#[test]
fn unindexed_id_is_absent() {
    let index = FallbackIndex::global();

    for kind in RecordKind::ALL {
        assert!(index.get_by_id(kind, "agent_47").is_none());
    }
}

#[test]
fn ids_are_scoped_by_kind() {
    let index = FallbackIndex::global();

    // `palace_staff` is a disguise, not a target
    assert!(index.get_by_id(RecordKind::Disguise, "palace_staff").is_some());
    assert!(index.get_by_id(RecordKind::Target, "palace_staff").is_none());
}

#[test]
fn mastery_unlocks_are_keyed_by_unlock_name() {
    let index = FallbackIndex::global();

    let unlock = index
        .mastery_unlock("ICA19 Silenced Pistol")
        .expect("Unlock should be indexed");

    assert_eq!(unlock.level, 10);
    assert!(index.mastery_unlock("paris_mastery_10").is_none());
}

#[test]
fn finds_every_mission_in_dataset_order() {
    let index = FallbackIndex::global();

    let ids: Vec<&str> = index.missions().iter().map(|m| m.id.as_str()).collect();

    assert_eq!(ids, data::MISSION_IDS);
    for id in data::MISSION_IDS {
        assert_eq!(index.mission(id).map(|m| m.id.as_str()), Some(id));
    }
}

#[test]
fn later_duplicate_id_replaces_earlier() {
    let mut missions = data::missions();
    let mut renamed = missions[0].targets[0].clone();
    renamed.name = "Viktor Novikov (Decoy)".to_string();
    missions[1].targets.push(renamed);

    let index = FallbackIndex::build(missions);

    assert_eq!(
        index.target("viktor_novikov").map(|t| t.name.as_str()),
        Some("Viktor Novikov (Decoy)")
    );
}

#[test]
fn record_converts_to_owned() {
    let index = FallbackIndex::global();

    let record = index
        .get_by_id(RecordKind::Weapon, "golf_ball")
        .expect("Weapon should be indexed");

    assert_eq!(record.kind(), RecordKind::Weapon);
    assert!(matches!(record.to_owned_record(), FallbackRecord::Weapon(w) if w.name == "Golf Ball"));
}
