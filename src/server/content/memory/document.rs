//! Stored document shapes for the in-memory store.
//!
//! Unlike view models, these hold references as document IDs. Targets, disguises, and the
//! other mission records have no outgoing references, so the store keeps them in their
//! view-model form directly.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{
    content::{PublicationStatus, Slug},
    guide::GuideDifficulty,
    image::ImageRef,
    mission::{MissionDifficulty, StartingLocation},
    rich_text::RichText,
};

#[derive(Clone, Debug, PartialEq)]
pub struct GameDocument {
    pub id: String,
    pub name: String,
    pub slug: Slug,
    pub description: Option<String>,
    pub cover_image: Option<ImageRef>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    pub featured: bool,
    pub status: PublicationStatus,
}

impl GameDocument {
    /// Minimal published, non-featured game.
    pub fn new(id: impl Into<String>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: Slug::new(slug),
            description: None,
            cover_image: None,
            developer: None,
            publisher: None,
            release_date: None,
            genres: Vec::new(),
            platforms: Vec::new(),
            featured: false,
            status: PublicationStatus::Published,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MissionDocument {
    pub id: String,
    pub name: String,
    pub slug: Slug,
    pub location: String,
    pub difficulty: MissionDifficulty,
    pub description: Option<String>,
    pub mission_image: Option<ImageRef>,
    pub location_map: Option<ImageRef>,
    /// ID of the owning game
    pub game: String,
    pub targets: Vec<String>,
    pub disguises: Vec<String>,
    pub weapons: Vec<String>,
    pub opportunities: Vec<String>,
    pub challenges: Vec<String>,
    pub mastery_unlocks: Vec<String>,
    pub starting_locations: Vec<StartingLocation>,
    pub tips: Option<RichText>,
    pub walkthrough: Option<RichText>,
}

impl MissionDocument {
    /// Mission with no references other than its game.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        slug: impl Into<String>,
        game: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: Slug::new(slug),
            location: String::new(),
            difficulty: MissionDifficulty::Novice,
            description: None,
            mission_image: None,
            location_map: None,
            game: game.into(),
            targets: Vec::new(),
            disguises: Vec::new(),
            weapons: Vec::new(),
            opportunities: Vec::new(),
            challenges: Vec::new(),
            mastery_unlocks: Vec::new(),
            starting_locations: Vec::new(),
            tips: None,
            walkthrough: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GuideDocument {
    pub id: String,
    pub title: String,
    pub slug: Slug,
    pub description: Option<String>,
    pub cover_image: Option<ImageRef>,
    /// ID of the game the guide covers
    pub game: String,
    pub mission: Option<String>,
    pub author: Option<String>,
    pub content: Option<RichText>,
    pub tags: Vec<String>,
    pub difficulty: Option<GuideDifficulty>,
    pub estimated_time: Option<String>,
    pub featured: bool,
    pub published_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub status: PublicationStatus,
}

impl GuideDocument {
    /// Published, non-featured guide without an author or mission.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        slug: impl Into<String>,
        game: impl Into<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: Slug::new(slug),
            description: None,
            cover_image: None,
            game: game.into(),
            mission: None,
            author: None,
            content: None,
            tags: Vec::new(),
            difficulty: None,
            estimated_time: None,
            featured: false,
            published_at,
            updated_at: None,
            status: PublicationStatus::Published,
        }
    }
}
