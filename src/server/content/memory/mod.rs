//! In-memory content store.
//!
//! Evaluates each query's join specification explicitly: filter, order, limit, then expand
//! exactly the references the matching GROQ projection expands. Used when no hosted store is
//! configured (seeded from the fallback dataset) and as the store behind query tests.

pub mod document;

#[cfg(test)]
mod tests;

use std::{cmp::Ordering, collections::HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    model::{
        content::PublicationStatus,
        featured::{
            FeaturedContent, FeaturedGame, FeaturedGuide, RecentGuide, FEATURED_GAMES_LIMIT,
            FEATURED_GUIDES_LIMIT, RECENT_GUIDES_LIMIT,
        },
        game::{GameDetail, GameGuide, GameSummary},
        guide::{Author, AuthorSummary, GuideDetail, GuideGame, GuideListItem, GuideMission},
        mission::{
            Challenge, Disguise, MasteryUnlock, MissionDetail, MissionGame, MissionSummary,
            Opportunity, Target, Weapon,
        },
    },
    server::{content::ContentStore, error::retrieval::StoreError},
};

use self::document::{GameDocument, GuideDocument, MissionDocument};

/// Every document held by a [`MemoryStore`].
#[derive(Clone, Debug, Default)]
pub struct Documents {
    /// Game, mission, and guide documents in insertion order
    pub games: Vec<GameDocument>,
    pub missions: Vec<MissionDocument>,
    pub guides: Vec<GuideDocument>,
    /// Referenced documents keyed by `_id`
    pub authors: HashMap<String, Author>,
    pub targets: HashMap<String, Target>,
    pub disguises: HashMap<String, Disguise>,
    pub weapons: HashMap<String, Weapon>,
    pub opportunities: HashMap<String, Opportunity>,
    pub challenges: HashMap<String, Challenge>,
    pub mastery_unlocks: HashMap<String, MasteryUnlock>,
}

impl Documents {
    /// The `insert_*` methods key each referenced document by its `_id`, replacing any
    /// document already stored under that ID.
    pub fn insert_author(&mut self, author: Author) {
        self.authors.insert(author.id.clone(), author);
    }

    pub fn insert_target(&mut self, target: Target) {
        self.targets.insert(target.id.clone(), target);
    }

    pub fn insert_disguise(&mut self, disguise: Disguise) {
        self.disguises.insert(disguise.id.clone(), disguise);
    }

    pub fn insert_weapon(&mut self, weapon: Weapon) {
        self.weapons.insert(weapon.id.clone(), weapon);
    }

    pub fn insert_opportunity(&mut self, opportunity: Opportunity) {
        self.opportunities.insert(opportunity.id.clone(), opportunity);
    }

    pub fn insert_challenge(&mut self, challenge: Challenge) {
        self.challenges.insert(challenge.id.clone(), challenge);
    }

    pub fn insert_mastery_unlock(&mut self, unlock: MasteryUnlock) {
        self.mastery_unlocks.insert(unlock.id.clone(), unlock);
    }

    /// `count(*[_type == "mission" && references(^._id)])`
    fn mission_count(&self, game_id: &str) -> u32 {
        self.missions.iter().filter(|m| m.game == game_id).count() as u32
    }

    fn guide_game(&self, game_id: &str, with_cover: bool) -> Option<GuideGame> {
        self.games.iter().find(|g| g.id == game_id).map(|g| GuideGame {
            name: g.name.clone(),
            slug: g.slug.clone(),
            cover_image: if with_cover { g.cover_image.clone() } else { None },
        })
    }

    fn author(&self, author_id: Option<&String>) -> Option<&Author> {
        author_id.and_then(|id| self.authors.get(id))
    }

    /// Resolves a reference list, dropping references to missing documents.
    fn resolve<T: Clone>(ids: &[String], records: &HashMap<String, T>) -> Vec<T> {
        ids.iter().filter_map(|id| records.get(id).cloned()).collect()
    }

    fn published_guides(&self) -> Vec<&GuideDocument> {
        let mut guides: Vec<&GuideDocument> = self
            .guides
            .iter()
            .filter(|g| g.status == PublicationStatus::Published)
            .collect();
        guides.sort_by(|a, b| newest_first(a, b));
        guides
    }

    fn published_games(&self) -> Vec<&GameDocument> {
        let mut games: Vec<&GameDocument> = self
            .games
            .iter()
            .filter(|g| g.status == PublicationStatus::Published)
            .collect();
        games.sort_by(|a, b| a.name.cmp(&b.name));
        games
    }
}

fn newest_first(a: &GuideDocument, b: &GuideDocument) -> Ordering {
    b.published_at.cmp(&a.published_at)
}

/// Content store holding documents in process memory.
///
/// Documents can be edited between queries with [`MemoryStore::edit`]; aggregates are
/// recomputed on every query so edits are visible immediately.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<Documents>,
}

impl MemoryStore {
    pub fn new(documents: Documents) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }

    /// Applies an editorial change to the stored documents.
    pub async fn edit<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Documents) -> R,
    {
        let mut documents = self.documents.write().await;
        f(&mut documents)
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn list_games(&self) -> Result<Vec<GameSummary>, StoreError> {
        let docs = self.documents.read().await;

        Ok(docs
            .published_games()
            .into_iter()
            .map(|g| GameSummary {
                id: g.id.clone(),
                name: g.name.clone(),
                slug: g.slug.clone(),
                description: g.description.clone(),
                cover_image: g.cover_image.clone(),
                developer: g.developer.clone(),
                publisher: g.publisher.clone(),
                release_date: g.release_date,
                genres: g.genres.clone(),
                platforms: g.platforms.clone(),
                featured: g.featured,
                mission_count: docs.mission_count(&g.id),
            })
            .collect())
    }

    async fn game_by_slug(&self, slug: &str) -> Result<Option<GameDetail>, StoreError> {
        let docs = self.documents.read().await;

        let Some(game) = docs
            .games
            .iter()
            .find(|g| g.slug.as_str() == slug && g.status != PublicationStatus::Archived)
        else {
            return Ok(None);
        };

        let mut missions: Vec<&MissionDocument> =
            docs.missions.iter().filter(|m| m.game == game.id).collect();
        missions.sort_by(|a, b| a.name.cmp(&b.name));

        let guides = docs
            .published_guides()
            .into_iter()
            .filter(|g| g.game == game.id)
            .map(|g| GameGuide {
                id: g.id.clone(),
                title: g.title.clone(),
                slug: g.slug.clone(),
                description: g.description.clone(),
                cover_image: g.cover_image.clone(),
                difficulty: g.difficulty,
                estimated_time: g.estimated_time.clone(),
                published_at: g.published_at,
                author: docs.author(g.author.as_ref()).map(|a| AuthorSummary {
                    name: a.name.clone(),
                    slug: None,
                    avatar: a.avatar.clone(),
                }),
            })
            .collect();

        Ok(Some(GameDetail {
            id: game.id.clone(),
            name: game.name.clone(),
            slug: game.slug.clone(),
            description: game.description.clone(),
            cover_image: game.cover_image.clone(),
            developer: game.developer.clone(),
            publisher: game.publisher.clone(),
            release_date: game.release_date,
            genres: game.genres.clone(),
            platforms: game.platforms.clone(),
            missions: missions
                .into_iter()
                .map(|m| MissionSummary {
                    id: m.id.clone(),
                    name: m.name.clone(),
                    slug: m.slug.clone(),
                    location: m.location.clone(),
                    difficulty: m.difficulty,
                    description: m.description.clone(),
                    mission_image: m.mission_image.clone(),
                })
                .collect(),
            guides,
        }))
    }

    async fn mission_by_slug(&self, slug: &str) -> Result<Option<MissionDetail>, StoreError> {
        let docs = self.documents.read().await;

        let Some(mission) = docs.missions.iter().find(|m| m.slug.as_str() == slug) else {
            return Ok(None);
        };

        let game = docs
            .games
            .iter()
            .find(|g| g.id == mission.game)
            .map(|g| MissionGame {
                name: g.name.clone(),
                slug: g.slug.clone(),
            });

        Ok(Some(MissionDetail {
            id: mission.id.clone(),
            name: mission.name.clone(),
            slug: mission.slug.clone(),
            location: mission.location.clone(),
            difficulty: mission.difficulty,
            description: mission.description.clone(),
            mission_image: mission.mission_image.clone(),
            location_map: mission.location_map.clone(),
            game,
            targets: Documents::resolve(&mission.targets, &docs.targets),
            disguises: Documents::resolve(&mission.disguises, &docs.disguises),
            weapons: Documents::resolve(&mission.weapons, &docs.weapons),
            opportunities: Documents::resolve(&mission.opportunities, &docs.opportunities),
            challenges: Documents::resolve(&mission.challenges, &docs.challenges),
            mastery_unlocks: Documents::resolve(&mission.mastery_unlocks, &docs.mastery_unlocks),
            starting_locations: mission.starting_locations.clone(),
            tips: mission.tips.clone(),
            walkthrough: mission.walkthrough.clone(),
        }))
    }

    async fn list_guides(&self) -> Result<Vec<GuideListItem>, StoreError> {
        let docs = self.documents.read().await;

        Ok(docs
            .published_guides()
            .into_iter()
            .map(|g| GuideListItem {
                id: g.id.clone(),
                title: g.title.clone(),
                slug: g.slug.clone(),
                description: g.description.clone(),
                cover_image: g.cover_image.clone(),
                difficulty: g.difficulty,
                estimated_time: g.estimated_time.clone(),
                published_at: g.published_at,
                tags: g.tags.clone(),
                featured: g.featured,
                game: docs.guide_game(&g.game, true),
                author: docs.author(g.author.as_ref()).map(Author::summary),
            })
            .collect())
    }

    async fn guide_by_slug(&self, slug: &str) -> Result<Option<GuideDetail>, StoreError> {
        let docs = self.documents.read().await;

        let Some(guide) = docs
            .guides
            .iter()
            .find(|g| g.slug.as_str() == slug && g.status == PublicationStatus::Published)
        else {
            return Ok(None);
        };

        let mission = guide.mission.as_ref().and_then(|id| {
            docs.missions
                .iter()
                .find(|m| &m.id == id)
                .map(|m| GuideMission {
                    name: m.name.clone(),
                    slug: m.slug.clone(),
                    location: m.location.clone(),
                })
        });

        Ok(Some(GuideDetail {
            id: guide.id.clone(),
            title: guide.title.clone(),
            slug: guide.slug.clone(),
            description: guide.description.clone(),
            cover_image: guide.cover_image.clone(),
            content: guide.content.clone(),
            difficulty: guide.difficulty,
            estimated_time: guide.estimated_time.clone(),
            published_at: guide.published_at,
            updated_at: guide.updated_at,
            tags: guide.tags.clone(),
            game: docs.guide_game(&guide.game, true),
            mission,
            author: docs.author(guide.author.as_ref()).map(Author::profile),
        }))
    }

    async fn featured_content(&self) -> Result<FeaturedContent, StoreError> {
        let docs = self.documents.read().await;

        let featured_games = docs
            .published_games()
            .into_iter()
            .filter(|g| g.featured)
            .take(FEATURED_GAMES_LIMIT)
            .map(|g| FeaturedGame {
                id: g.id.clone(),
                name: g.name.clone(),
                slug: g.slug.clone(),
                description: g.description.clone(),
                cover_image: g.cover_image.clone(),
                developer: g.developer.clone(),
                mission_count: docs.mission_count(&g.id),
            })
            .collect();

        let published_guides = docs.published_guides();

        let featured_guides = published_guides
            .iter()
            .filter(|g| g.featured)
            .take(FEATURED_GUIDES_LIMIT)
            .map(|g| FeaturedGuide {
                id: g.id.clone(),
                title: g.title.clone(),
                slug: g.slug.clone(),
                description: g.description.clone(),
                cover_image: g.cover_image.clone(),
                difficulty: g.difficulty,
                estimated_time: g.estimated_time.clone(),
                published_at: g.published_at,
                game: docs.guide_game(&g.game, false),
                author: docs.author(g.author.as_ref()).map(|a| AuthorSummary {
                    name: a.name.clone(),
                    slug: None,
                    avatar: a.avatar.clone(),
                }),
            })
            .collect();

        let recent_guides = published_guides
            .iter()
            .take(RECENT_GUIDES_LIMIT)
            .map(|g| RecentGuide {
                id: g.id.clone(),
                title: g.title.clone(),
                slug: g.slug.clone(),
                description: g.description.clone(),
                cover_image: g.cover_image.clone(),
                published_at: g.published_at,
                game: docs.guide_game(&g.game, false),
            })
            .collect();

        Ok(FeaturedContent {
            featured_games,
            featured_guides,
            recent_guides,
        })
    }
}
