//! Tests for MemoryStore::mission_by_slug
//!
//! Reference lists are expanded into full records in reference order; references to
//! documents that do not exist are dropped.

use crate::{
    model::{
        content::Slug,
        mission::{
            Disguise, MasteryUnlock, MasteryUnlockType, StartingLocation, Target,
        },
    },
    server::content::ContentStore,
};

use super::store;

fn target(id: &str, name: &str) -> Target {
    Target {
        id: id.to_string(),
        name: name.to_string(),
        slug: Slug::new(id),
        description: None,
        image: None,
        locations: vec!["Palais de Walewska".to_string()],
        routines: Vec::new(),
        vulnerabilities: Vec::new(),
    }
}

fn disguise(id: &str, name: &str) -> Disguise {
    Disguise {
        id: id.to_string(),
        name: name.to_string(),
        slug: Slug::new(id),
        image: None,
        access_areas: vec!["Kitchen".to_string()],
        restricted_areas: Vec::new(),
        obtain_method: None,
        suspicious_to: Vec::new(),
    }
}

#[tokio::test]
async fn expands_references_in_order() {
    let store = store();
    store
        .edit(|docs| {
            docs.insert_target(target("viktor_novikov", "Viktor Novikov"));
            docs.insert_target(target("dalia_margolis", "Dalia Margolis"));
            docs.insert_disguise(disguise("chef", "Chef"));
            docs.insert_mastery_unlock(MasteryUnlock {
                id: "paris_mastery_2".to_string(),
                level: 2,
                unlock: "Palace Staff Starting Location".to_string(),
                unlock_type: MasteryUnlockType::StartingLocation,
                description: None,
                image: None,
            });

            let paris = &mut docs.missions[0];
            paris.targets = vec!["viktor_novikov".to_string(), "dalia_margolis".to_string()];
            paris.disguises = vec!["chef".to_string()];
            paris.mastery_unlocks = vec!["paris_mastery_2".to_string()];
            paris.starting_locations = vec![StartingLocation {
                name: "Palace Staff".to_string(),
                description: None,
                location: "Palace Staff".to_string(),
                unlock_level: 2,
                available_disguise: Some("palace_staff".to_string()),
            }];
        })
        .await;

    let mission = store
        .mission_by_slug("the-showstopper")
        .await
        .expect("Failed to get mission")
        .expect("Mission should exist");

    let targets: Vec<&str> = mission.targets.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(targets, vec!["Viktor Novikov", "Dalia Margolis"]);
    assert_eq!(mission.disguises[0].access_areas, vec!["Kitchen".to_string()]);
    assert_eq!(mission.mastery_unlocks[0].level, 2);
    assert_eq!(mission.starting_locations.len(), 1);

    let game = mission.game.expect("Game should be expanded");
    assert_eq!(game.slug.as_str(), "hitman-3");
}

#[tokio::test]
async fn drops_dangling_references() {
    let store = store();
    store
        .edit(|docs| {
            docs.insert_target(target("viktor_novikov", "Viktor Novikov"));
            docs.missions[0].targets =
                vec!["missing_target".to_string(), "viktor_novikov".to_string()];
        })
        .await;

    let mission = store
        .mission_by_slug("the-showstopper")
        .await
        .expect("Failed to get mission")
        .expect("Mission should exist");

    assert_eq!(mission.targets.len(), 1);
    assert_eq!(mission.targets[0].id, "viktor_novikov");
}

#[tokio::test]
async fn mission_without_references_has_empty_lists() {
    let store = store();

    let mission = store
        .mission_by_slug("curtains-down")
        .await
        .expect("Failed to get mission")
        .expect("Mission should exist");

    assert!(mission.targets.is_empty());
    assert!(mission.weapons.is_empty());
    assert!(mission.walkthrough.is_none());
}

#[tokio::test]
async fn unknown_slug_is_absent() {
    let store = store();

    let mission = store
        .mission_by_slug("a-house-built-on-sand")
        .await
        .expect("Failed to get mission");

    assert!(mission.is_none());
}
