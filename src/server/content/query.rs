//! Catalog of named content queries.
//!
//! Every query has a fixed projection written in GROQ, the store's query language. The
//! projections are the join specifications: each one names exactly which references are
//! expanded and how deep, so resolution never recurses beyond what is written here.

use std::fmt;

/// Name of a query in the catalog, carried by errors and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryName {
    ListGames,
    GameBySlug,
    MissionBySlug,
    ListGuides,
    GuideBySlug,
    FeaturedContent,
}

impl QueryName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListGames => "listGames",
            Self::GameBySlug => "getGameBySlug",
            Self::MissionBySlug => "getMissionBySlug",
            Self::ListGuides => "listGuides",
            Self::GuideBySlug => "getGuideBySlug",
            Self::FeaturedContent => "getFeaturedContent",
        }
    }

    /// GROQ text sent to the store for this query.
    pub fn groq(&self) -> &'static str {
        match self {
            Self::ListGames => LIST_GAMES,
            Self::GameBySlug => GAME_BY_SLUG,
            Self::MissionBySlug => MISSION_BY_SLUG,
            Self::ListGuides => LIST_GUIDES,
            Self::GuideBySlug => GUIDE_BY_SLUG,
            Self::FeaturedContent => FEATURED_CONTENT,
        }
    }
}

impl fmt::Display for QueryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Published games by name, each with the number of missions referencing it.
pub static LIST_GAMES: &str = r#"*[_type == "game" && status == "published"] | order(name asc) {
  _id,
  name,
  slug,
  description,
  coverImage,
  developer,
  publisher,
  releaseDate,
  genres,
  platforms,
  featured,
  "missionCount": count(*[_type == "mission" && references(^._id)])
}"#;

/// One non-archived game with mission summaries and published guide cards.
pub static GAME_BY_SLUG: &str = r#"*[_type == "game" && slug.current == $slug && status != "archived"][0] {
  _id,
  name,
  slug,
  description,
  coverImage,
  developer,
  publisher,
  releaseDate,
  genres,
  platforms,
  "missions": *[_type == "mission" && references(^._id)] | order(name asc) {
    _id,
    name,
    slug,
    location,
    difficulty,
    description,
    missionImage
  },
  "guides": *[_type == "guide" && references(^._id) && status == "published"] | order(publishedAt desc) {
    _id,
    title,
    slug,
    description,
    coverImage,
    difficulty,
    estimatedTime,
    publishedAt,
    author-> {
      name,
      avatar
    }
  }
}"#;

/// One mission with every reference list expanded one level.
pub static MISSION_BY_SLUG: &str = r#"*[_type == "mission" && slug.current == $slug][0] {
  _id,
  name,
  slug,
  location,
  difficulty,
  description,
  missionImage,
  locationMap,
  game-> {
    name,
    slug
  },
  "targets": targets[]-> {
    _id,
    name,
    slug,
    description,
    image,
    locations,
    routines,
    vulnerabilities
  },
  "disguises": disguises[]-> {
    _id,
    name,
    slug,
    image,
    accessAreas,
    restrictedAreas,
    obtainMethod,
    suspiciousTo
  },
  "weapons": weapons[]-> {
    _id,
    name,
    slug,
    type,
    image,
    concealable,
    locations,
    unlockLevel,
    description
  },
  "opportunities": opportunities[]-> {
    _id,
    name,
    slug,
    description,
    image,
    steps,
    requiredItems,
    requiredDisguise,
    difficulty,
    detailedWalkthrough
  },
  "challenges": challenges[]-> {
    _id,
    name,
    slug,
    description,
    type,
    xpReward,
    requirements,
    tips
  },
  "masteryUnlocks": masteryUnlocks[]-> {
    _id,
    level,
    unlock,
    type,
    description,
    image
  },
  startingLocations,
  tips,
  walkthrough
}"#;

/// Published guides, newest first.
pub static LIST_GUIDES: &str = r#"*[_type == "guide" && status == "published"] | order(publishedAt desc) {
  _id,
  title,
  slug,
  description,
  coverImage,
  difficulty,
  estimatedTime,
  publishedAt,
  tags,
  featured,
  game-> {
    name,
    slug,
    coverImage
  },
  author-> {
    name,
    slug,
    avatar
  }
}"#;

/// One published guide with its full content and author profile.
pub static GUIDE_BY_SLUG: &str = r#"*[_type == "guide" && slug.current == $slug && status == "published"][0] {
  _id,
  title,
  slug,
  description,
  coverImage,
  content,
  difficulty,
  estimatedTime,
  publishedAt,
  updatedAt,
  tags,
  game-> {
    name,
    slug,
    coverImage
  },
  mission-> {
    name,
    slug,
    location
  },
  author-> {
    name,
    slug,
    avatar,
    bio,
    socialLinks
  }
}"#;

/// Home page slices. Limits match the constants in `model::featured`.
pub static FEATURED_CONTENT: &str = r#"{
  "featuredGames": *[_type == "game" && featured == true && status == "published"] | order(name asc) [0...3] {
    _id,
    name,
    slug,
    description,
    coverImage,
    developer,
    "missionCount": count(*[_type == "mission" && references(^._id)])
  },
  "featuredGuides": *[_type == "guide" && featured == true && status == "published"] | order(publishedAt desc) [0...6] {
    _id,
    title,
    slug,
    description,
    coverImage,
    difficulty,
    estimatedTime,
    publishedAt,
    game-> {
      name,
      slug
    },
    author-> {
      name,
      avatar
    }
  },
  "recentGuides": *[_type == "guide" && status == "published"] | order(publishedAt desc) [0...4] {
    _id,
    title,
    slug,
    description,
    coverImage,
    publishedAt,
    game-> {
      name,
      slug
    }
  }
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [QueryName; 6] = [
        QueryName::ListGames,
        QueryName::GameBySlug,
        QueryName::MissionBySlug,
        QueryName::ListGuides,
        QueryName::GuideBySlug,
        QueryName::FeaturedContent,
    ];

    #[test]
    fn only_slug_queries_take_a_slug_parameter() {
        for query in ALL {
            let takes_slug = matches!(
                query,
                QueryName::GameBySlug | QueryName::MissionBySlug | QueryName::GuideBySlug
            );

            assert_eq!(query.groq().contains("$slug"), takes_slug, "{}", query);
        }
    }

    #[test]
    fn public_guide_queries_filter_on_published_status() {
        for query in [
            QueryName::ListGuides,
            QueryName::GuideBySlug,
            QueryName::FeaturedContent,
        ] {
            assert!(query.groq().contains(r#"status == "published""#), "{}", query);
        }
    }

    #[test]
    fn featured_limits_match_model_constants() {
        use crate::model::featured::{
            FEATURED_GAMES_LIMIT, FEATURED_GUIDES_LIMIT, RECENT_GUIDES_LIMIT,
        };

        assert!(FEATURED_CONTENT.contains(&format!("[0...{}]", FEATURED_GAMES_LIMIT)));
        assert!(FEATURED_CONTENT.contains(&format!("[0...{}]", FEATURED_GUIDES_LIMIT)));
        assert!(FEATURED_CONTENT.contains(&format!("[0...{}]", RECENT_GUIDES_LIMIT)));
    }
}
