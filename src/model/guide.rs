use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{
    content::{null_as_empty, Slug},
    image::ImageRef,
    rich_text::RichText,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum GuideDifficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl GuideDifficulty {
    pub const ALL: [GuideDifficulty; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
    ];
}

/// Author byline. `slug` is only projected by the guide listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AuthorSummary {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<Slug>,
    #[serde(default)]
    pub avatar: Option<ImageRef>,
}

/// Author as shown beneath a full guide.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AuthorProfile {
    pub name: String,
    pub slug: Slug,
    #[serde(default)]
    pub avatar: Option<ImageRef>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub social_links: Option<SocialLinks>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// Complete author document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Slug,
    #[serde(default)]
    pub avatar: Option<ImageRef>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub social_links: Option<SocialLinks>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub expertise: Vec<String>,
    pub joined_at: DateTime<Utc>,
}

impl Author {
    pub fn summary(&self) -> AuthorSummary {
        AuthorSummary {
            name: self.name.clone(),
            slug: Some(self.slug.clone()),
            avatar: self.avatar.clone(),
        }
    }

    pub fn profile(&self) -> AuthorProfile {
        AuthorProfile {
            name: self.name.clone(),
            slug: self.slug.clone(),
            avatar: self.avatar.clone(),
            bio: self.bio.clone(),
            social_links: self.social_links.clone(),
        }
    }
}

/// Game a guide is written for. `cover_image` is omitted by the home page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GuideGame {
    pub name: String,
    pub slug: Slug,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<ImageRef>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct GuideMission {
    pub name: String,
    pub slug: Slug,
    pub location: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GuideListItem {
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
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub game: Option<GuideGame>,
    #[serde(default)]
    pub author: Option<AuthorSummary>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GuideDetail {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image: Option<ImageRef>,
    #[serde(default)]
    pub content: Option<RichText>,
    #[serde(default)]
    pub difficulty: Option<GuideDifficulty>,
    #[serde(default)]
    pub estimated_time: Option<String>,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub game: Option<GuideGame>,
    #[serde(default)]
    pub mission: Option<GuideMission>,
    #[serde(default)]
    pub author: Option<AuthorProfile>,
}
