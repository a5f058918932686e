//! Tests for MemoryStore::game_by_slug

use crate::{
    model::content::PublicationStatus,
    server::content::ContentStore,
};

use super::store;

#[tokio::test]
async fn returns_game_with_missions_and_published_guides() {
    let store = store();

    let game = store
        .game_by_slug("hitman-3")
        .await
        .expect("Failed to get game")
        .expect("Game should exist");

    let missions: Vec<&str> = game.missions.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(missions, vec!["On Top of the World", "The Showstopper"]);

    // Draft guide excluded, newest first
    let guides: Vec<&str> = game.guides.iter().map(|g| g.slug.as_str()).collect();
    assert_eq!(guides, vec!["silent-assassin-paris", "beginner-tips"]);

    let author = game.guides[0].author.as_ref().expect("Author should be expanded");
    assert_eq!(author.name, "Agent Diana");
    assert!(author.slug.is_none());
}

#[tokio::test]
async fn unknown_slug_is_absent() {
    let store = store();

    let game = store
        .game_by_slug("hitman-4")
        .await
        .expect("Failed to get game");

    assert!(game.is_none());
}

#[tokio::test]
async fn draft_game_is_reachable_by_slug() {
    let store = store();

    let game = store
        .game_by_slug("absolution")
        .await
        .expect("Failed to get game");

    assert!(game.is_some_and(|g| g.missions.is_empty()));
}

#[tokio::test]
async fn archived_game_is_absent() {
    let store = store();
    store
        .edit(|docs| docs.games[1].status = PublicationStatus::Archived)
        .await;

    let game = store
        .game_by_slug("blood-money")
        .await
        .expect("Failed to get game");

    assert!(game.is_none());
}
