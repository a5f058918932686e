//! Static fallback dataset accessor.
//!
//! The built-in Hitman 3 missions are indexed once per process. Lookups by ID never fail:
//! an unindexed ID is simply absent. Filters walk the missions in dataset order, so their
//! results are stable across calls.

pub mod data;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use chrono::NaiveDate;
use dioxus_logger::tracing;
use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::{
    model::{
        content::Slug,
        fallback::{FallbackMission, FallbackRecord, FallbackStartingLocation, RecordKind},
        mission::{
            Challenge, ChallengeType, Disguise, MasteryUnlock, MasteryUnlockType,
            MissionDifficulty, Opportunity, OpportunityDifficulty, StartingLocation, Target,
            Weapon,
        },
    },
    server::content::memory::{
        document::{GameDocument, MissionDocument},
        Documents, MemoryStore,
    },
};

static GLOBAL_INDEX: OnceCell<FallbackIndex> = OnceCell::new();

/// Disguise worn at each derived starting location, keyed by unlock name.
static STARTING_DISGUISES: [(&str, &str); 4] = [
    ("Palace Staff Starting Location", "palace_staff"),
    ("Lab Technician Starting Location", "lab_technician"),
    ("Atrium Starting Location", "event_staff"),
    ("Private Investigator Starting Location", "detective"),
];

/// Game the fallback missions are published under.
pub static FALLBACK_GAME_ID: &str = "game-hitman-3";
pub static FALLBACK_GAME_SLUG: &str = "hitman-3";

/// A record borrowed from the index.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record<'a> {
    Mission(&'a FallbackMission),
    Target(&'a Target),
    Disguise(&'a Disguise),
    Weapon(&'a Weapon),
    Opportunity(&'a Opportunity),
    Challenge(&'a Challenge),
    MasteryUnlock(&'a MasteryUnlock),
    StartingLocation(&'a FallbackStartingLocation),
}

impl Record<'_> {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Mission(_) => RecordKind::Mission,
            Self::Target(_) => RecordKind::Target,
            Self::Disguise(_) => RecordKind::Disguise,
            Self::Weapon(_) => RecordKind::Weapon,
            Self::Opportunity(_) => RecordKind::Opportunity,
            Self::Challenge(_) => RecordKind::Challenge,
            Self::MasteryUnlock(_) => RecordKind::MasteryUnlock,
            Self::StartingLocation(_) => RecordKind::StartingLocation,
        }
    }

    pub fn to_owned_record(&self) -> FallbackRecord {
        match *self {
            Self::Mission(r) => FallbackRecord::Mission(r.clone()),
            Self::Target(r) => FallbackRecord::Target(r.clone()),
            Self::Disguise(r) => FallbackRecord::Disguise(r.clone()),
            Self::Weapon(r) => FallbackRecord::Weapon(r.clone()),
            Self::Opportunity(r) => FallbackRecord::Opportunity(r.clone()),
            Self::Challenge(r) => FallbackRecord::Challenge(r.clone()),
            Self::MasteryUnlock(r) => FallbackRecord::MasteryUnlock(r.clone()),
            Self::StartingLocation(r) => FallbackRecord::StartingLocation(r.clone()),
        }
    }
}

/// Lookup tables over a fixed mission collection.
#[derive(Debug)]
pub struct FallbackIndex {
    missions: Vec<FallbackMission>,
    mission_ids: HashMap<String, usize>,
    targets: HashMap<String, Target>,
    disguises: HashMap<String, Disguise>,
    weapons: HashMap<String, Weapon>,
    opportunities: HashMap<String, Opportunity>,
    challenges: HashMap<String, Challenge>,
    /// Keyed by unlock name
    mastery_unlocks: HashMap<String, MasteryUnlock>,
    starting_locations: HashMap<String, FallbackStartingLocation>,
}

impl FallbackIndex {
    /// Indexes every mission and the records nested in it.
    ///
    /// A record whose ID repeats one indexed earlier replaces it.
    pub fn build(missions: Vec<FallbackMission>) -> Self {
        let mut index = Self {
            missions: Vec::new(),
            mission_ids: HashMap::new(),
            targets: HashMap::new(),
            disguises: HashMap::new(),
            weapons: HashMap::new(),
            opportunities: HashMap::new(),
            challenges: HashMap::new(),
            mastery_unlocks: HashMap::new(),
            starting_locations: HashMap::new(),
        };

        for (position, mission) in missions.iter().enumerate() {
            index.mission_ids.insert(mission.id.clone(), position);

            for target in &mission.targets {
                index.targets.insert(target.id.clone(), target.clone());
            }
            for disguise in &mission.disguises {
                index.disguises.insert(disguise.id.clone(), disguise.clone());
            }
            for weapon in &mission.weapons {
                index.weapons.insert(weapon.id.clone(), weapon.clone());
            }
            for opportunity in &mission.opportunities {
                index
                    .opportunities
                    .insert(opportunity.id.clone(), opportunity.clone());
            }
            for challenge in &mission.challenges {
                index.challenges.insert(challenge.id.clone(), challenge.clone());
            }
            for unlock in &mission.mastery {
                index
                    .mastery_unlocks
                    .insert(unlock.unlock.clone(), unlock.clone());

                if unlock.unlock_type == MasteryUnlockType::StartingLocation {
                    let location = derive_starting_location(unlock, mission);
                    index
                        .starting_locations
                        .insert(location.id.clone(), location);
                }
            }
        }

        index.missions = missions;
        index
    }

    /// Index over the built-in dataset, built on first access.
    pub fn global() -> &'static FallbackIndex {
        GLOBAL_INDEX.get_or_init(|| {
            let index = Self::build(data::missions());

            tracing::debug!(
                "Indexed {} fallback missions with {} targets",
                index.missions.len(),
                index.targets.len()
            );

            index
        })
    }

    pub fn missions(&self) -> &[FallbackMission] {
        &self.missions
    }

    /// Looks up any record by kind. Mastery unlocks are looked up by unlock name.
    pub fn get_by_id(&self, kind: RecordKind, id: &str) -> Option<Record<'_>> {
        match kind {
            RecordKind::Mission => self.mission(id).map(Record::Mission),
            RecordKind::Target => self.target(id).map(Record::Target),
            RecordKind::Disguise => self.disguise(id).map(Record::Disguise),
            RecordKind::Weapon => self.weapon(id).map(Record::Weapon),
            RecordKind::Opportunity => self.opportunity(id).map(Record::Opportunity),
            RecordKind::Challenge => self.challenge(id).map(Record::Challenge),
            RecordKind::MasteryUnlock => self.mastery_unlock(id).map(Record::MasteryUnlock),
            RecordKind::StartingLocation => {
                self.starting_location(id).map(Record::StartingLocation)
            }
        }
    }

    pub fn mission(&self, id: &str) -> Option<&FallbackMission> {
        self.mission_ids
            .get(id)
            .and_then(|&position| self.missions.get(position))
    }

    pub fn target(&self, id: &str) -> Option<&Target> {
        self.targets.get(id)
    }

    pub fn disguise(&self, id: &str) -> Option<&Disguise> {
        self.disguises.get(id)
    }

    pub fn weapon(&self, id: &str) -> Option<&Weapon> {
        self.weapons.get(id)
    }

    pub fn opportunity(&self, id: &str) -> Option<&Opportunity> {
        self.opportunities.get(id)
    }

    pub fn challenge(&self, id: &str) -> Option<&Challenge> {
        self.challenges.get(id)
    }

    pub fn mastery_unlock(&self, unlock: &str) -> Option<&MasteryUnlock> {
        self.mastery_unlocks.get(unlock)
    }

    pub fn starting_location(&self, id: &str) -> Option<&FallbackStartingLocation> {
        self.starting_locations.get(id)
    }

    pub fn missions_by_difficulty(&self, difficulty: MissionDifficulty) -> Vec<&FallbackMission> {
        self.missions
            .iter()
            .filter(|m| m.difficulty == difficulty)
            .collect()
    }

    pub fn challenges_by_type(&self, challenge_type: ChallengeType) -> Vec<&Challenge> {
        self.missions
            .iter()
            .flat_map(|m| &m.challenges)
            .filter(|c| c.challenge_type == challenge_type)
            .collect()
    }

    pub fn opportunities_by_difficulty(
        &self,
        difficulty: OpportunityDifficulty,
    ) -> Vec<&Opportunity> {
        self.missions
            .iter()
            .flat_map(|m| &m.opportunities)
            .filter(|o| o.difficulty == difficulty)
            .collect()
    }

    /// Converts the dataset into store documents: one published, featured game owning
    /// every mission, with each mission's records referenced by ID.
    pub fn to_documents(&self) -> Documents {
        let mut docs = Documents::default();

        let mut game = GameDocument::new(FALLBACK_GAME_ID, "Hitman 3", FALLBACK_GAME_SLUG);
        game.description =
            Some("A stealth video game developed and published by IO Interactive.".to_string());
        game.developer = Some("IO Interactive".to_string());
        game.publisher = Some("IO Interactive".to_string());
        game.release_date = NaiveDate::from_ymd_opt(2021, 1, 20);
        game.genres = vec!["Stealth".to_string(), "Action".to_string()];
        game.featured = true;
        docs.games.push(game);

        for mission in &self.missions {
            let mut document = MissionDocument::new(
                mission.id.as_str(),
                mission.name.as_str(),
                slug_for_mission(mission).current,
                FALLBACK_GAME_ID,
            );
            document.location = mission.location.clone();
            document.difficulty = mission.difficulty;
            document.targets = mission.targets.iter().map(|r| r.id.clone()).collect();
            document.disguises = mission.disguises.iter().map(|r| r.id.clone()).collect();
            document.weapons = mission.weapons.iter().map(|r| r.id.clone()).collect();
            document.opportunities = mission.opportunities.iter().map(|r| r.id.clone()).collect();
            document.challenges = mission.challenges.iter().map(|r| r.id.clone()).collect();
            document.mastery_unlocks = mission.mastery.iter().map(|r| r.id.clone()).collect();
            document.starting_locations = mission
                .mastery
                .iter()
                .filter(|u| u.unlock_type == MasteryUnlockType::StartingLocation)
                .map(|u| StartingLocation::from(derive_starting_location(u, mission)))
                .collect();

            mission.targets.iter().cloned().for_each(|r| docs.insert_target(r));
            mission.disguises.iter().cloned().for_each(|r| docs.insert_disguise(r));
            mission.weapons.iter().cloned().for_each(|r| docs.insert_weapon(r));
            mission
                .opportunities
                .iter()
                .cloned()
                .for_each(|r| docs.insert_opportunity(r));
            mission.challenges.iter().cloned().for_each(|r| docs.insert_challenge(r));
            mission
                .mastery
                .iter()
                .cloned()
                .for_each(|r| docs.insert_mastery_unlock(r));

            docs.missions.push(document);
        }

        docs
    }

    /// Store holding [`FallbackIndex::to_documents`], for serving queries without a hosted store.
    pub fn to_memory_store(&self) -> MemoryStore {
        MemoryStore::new(self.to_documents())
    }
}

/// Mission slug derived from its name, e.g. `The Showstopper` -> `the-showstopper`.
pub fn slug_for_mission(mission: &FallbackMission) -> Slug {
    let slug = mission
        .name
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    Slug::new(slug)
}

fn derive_starting_location(
    unlock: &MasteryUnlock,
    mission: &FallbackMission,
) -> FallbackStartingLocation {
    let id = unlock
        .unlock
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect::<String>()
        .to_lowercase();

    let available_disguise = STARTING_DISGUISES
        .iter()
        .find(|(name, _)| *name == unlock.unlock)
        .map(|(_, disguise)| disguise.to_string());

    FallbackStartingLocation {
        id,
        name: unlock.unlock.clone(),
        description: unlock.description.clone(),
        location: mission.location.clone(),
        unlock_level: u32::from(unlock.level),
        available_disguise,
    }
}

impl From<FallbackStartingLocation> for StartingLocation {
    fn from(location: FallbackStartingLocation) -> Self {
        Self {
            name: location.name,
            description: location.description,
            location: location.location,
            unlock_level: location.unlock_level,
            available_disguise: location.available_disguise,
        }
    }
}
