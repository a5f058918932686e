use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{
    content::{null_as_empty, Slug},
    guide::{AuthorSummary, GuideDifficulty, GuideGame},
    image::ImageRef,
};

/// Most featured games on the home page.
pub const FEATURED_GAMES_LIMIT: usize = 3;
/// Most featured guides on the home page.
pub const FEATURED_GUIDES_LIMIT: usize = 6;
/// Most recent guides on the home page.
pub const RECENT_GUIDES_LIMIT: usize = 4;

/// Home page content. Each slice is computed independently and may be empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FeaturedContent {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub featured_games: Vec<FeaturedGame>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub featured_guides: Vec<FeaturedGuide>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub recent_guides: Vec<RecentGuide>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FeaturedGame {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image: Option<ImageRef>,
    #[serde(default)]
    pub developer: Option<String>,
    pub mission_count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FeaturedGuide {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image: Option<ImageRef>,
    #[serde(default)]
    pub difficulty: Option<GuideDifficulty>,
    #[serde(default)]
    pub estimated_time: Option<String>,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub game: Option<GuideGame>,
    #[serde(default)]
    pub author: Option<AuthorSummary>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RecentGuide {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image: Option<ImageRef>,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub game: Option<GuideGame>,
}
