//! Tests for the in-memory content store's query joins.

mod game_by_slug;
mod mission_by_slug;

use chrono::{DateTime, TimeZone, Utc};

use crate::model::{
    content::{PublicationStatus, Slug},
    guide::Author,
};

use super::{
    document::{GameDocument, GuideDocument, MissionDocument},
    Documents, MemoryStore,
};

fn day(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
}

fn author(id: &str, name: &str) -> Author {
    Author {
        id: id.to_string(),
        name: name.to_string(),
        slug: Slug::new(name.to_lowercase().replace(' ', "-")),
        avatar: None,
        bio: Some(format!("{} writes guides", name)),
        email: None,
        website: None,
        social_links: None,
        expertise: vec!["stealth".to_string()],
        joined_at: day(1),
    }
}

/// Two games, three missions, and guides spread across publication states.
///
/// - `game-hitman-3` ("Hitman 3") owns `mission-paris` and `mission-dubai`
/// - `game-blood-money` ("Blood Money") owns `mission-curtains-down`
/// - `game-absolution` ("Absolution") is a draft with no missions
fn documents() -> Documents {
    let mut docs = Documents::default();

    let mut hitman = GameDocument::new("game-hitman-3", "Hitman 3", "hitman-3");
    hitman.featured = true;
    hitman.developer = Some("IO Interactive".to_string());

    let blood_money = GameDocument::new("game-blood-money", "Blood Money", "blood-money");

    let mut absolution = GameDocument::new("game-absolution", "Absolution", "absolution");
    absolution.status = PublicationStatus::Draft;
    absolution.featured = true;

    docs.games = vec![hitman, blood_money, absolution];

    docs.missions = vec![
        MissionDocument::new(
            "mission-paris",
            "The Showstopper",
            "the-showstopper",
            "game-hitman-3",
        ),
        MissionDocument::new(
            "mission-dubai",
            "On Top of the World",
            "on-top-of-the-world",
            "game-hitman-3",
        ),
        MissionDocument::new(
            "mission-curtains-down",
            "Curtains Down",
            "curtains-down",
            "game-blood-money",
        ),
    ];

    docs.insert_author(author("author-47", "Agent Diana"));

    let mut silent = GuideDocument::new(
        "guide-silent",
        "Silent Assassin Paris",
        "silent-assassin-paris",
        "game-hitman-3",
        day(10),
    );
    silent.author = Some("author-47".to_string());
    silent.mission = Some("mission-paris".to_string());
    silent.featured = true;

    let beginner = GuideDocument::new(
        "guide-beginner",
        "Beginner Tips",
        "beginner-tips",
        "game-hitman-3",
        day(5),
    );

    let mut draft = GuideDocument::new(
        "guide-draft",
        "Unfinished Route",
        "unfinished-route",
        "game-hitman-3",
        day(20),
    );
    draft.status = PublicationStatus::Draft;
    draft.featured = true;

    let opera = GuideDocument::new(
        "guide-opera",
        "Opera House Kills",
        "opera-house-kills",
        "game-blood-money",
        day(15),
    );

    docs.guides = vec![silent, beginner, draft, opera];

    docs
}

fn store() -> MemoryStore {
    MemoryStore::new(documents())
}
