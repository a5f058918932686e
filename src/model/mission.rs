use serde::{Deserialize, Serialize};

use crate::model::{
    content::{null_as_empty, null_elements_skipped, Slug},
    image::ImageRef,
    rich_text::RichText,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum MissionDifficulty {
    Novice,
    Professional,
    Master,
}

impl MissionDifficulty {
    pub const ALL: [MissionDifficulty; 3] = [Self::Novice, Self::Professional, Self::Master];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Professional => "Professional",
            Self::Master => "Master",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum SecurityLevel {
    Low,
    Medium,
    High,
}

impl SecurityLevel {
    pub const ALL: [SecurityLevel; 3] = [Self::Low, Self::Medium, Self::High];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum WeaponType {
    Firearm,
    Melee,
    Explosive,
    Poison,
    Accident,
    Thrown,
}

impl WeaponType {
    pub const ALL: [WeaponType; 6] = [
        Self::Firearm,
        Self::Melee,
        Self::Explosive,
        Self::Poison,
        Self::Accident,
        Self::Thrown,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum OpportunityDifficulty {
    Easy,
    Medium,
    Hard,
}

impl OpportunityDifficulty {
    pub const ALL: [OpportunityDifficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum ChallengeType {
    Assassination,
    Discovery,
    Feats,
    Targets,
    Classics,
}

impl ChallengeType {
    pub const ALL: [ChallengeType; 5] = [
        Self::Assassination,
        Self::Discovery,
        Self::Feats,
        Self::Targets,
        Self::Classics,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum MasteryUnlockType {
    Weapon,
    Equipment,
    #[serde(rename = "Starting Location")]
    StartingLocation,
    #[serde(rename = "Agency Pickup")]
    AgencyPickup,
    Suit,
}

impl MasteryUnlockType {
    pub const ALL: [MasteryUnlockType; 5] = [
        Self::Weapon,
        Self::Equipment,
        Self::StartingLocation,
        Self::AgencyPickup,
        Self::Suit,
    ];
}

/// Mission fields shown when missions are listed under their game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct MissionSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Slug,
    pub location: String,
    pub difficulty: MissionDifficulty,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub mission_image: Option<ImageRef>,
}

/// Game a mission belongs to, reduced to what a breadcrumb needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MissionGame {
    pub name: String,
    pub slug: Slug,
}

/// A mission with every reference list expanded into embedded records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct MissionDetail {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Slug,
    pub location: String,
    pub difficulty: MissionDifficulty,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub mission_image: Option<ImageRef>,
    #[serde(default)]
    pub location_map: Option<ImageRef>,
    #[serde(default)]
    pub game: Option<MissionGame>,
    #[serde(default, deserialize_with = "null_elements_skipped")]
    pub targets: Vec<Target>,
    #[serde(default, deserialize_with = "null_elements_skipped")]
    pub disguises: Vec<Disguise>,
    #[serde(default, deserialize_with = "null_elements_skipped")]
    pub weapons: Vec<Weapon>,
    #[serde(default, deserialize_with = "null_elements_skipped")]
    pub opportunities: Vec<Opportunity>,
    #[serde(default, deserialize_with = "null_elements_skipped")]
    pub challenges: Vec<Challenge>,
    #[serde(default, deserialize_with = "null_elements_skipped")]
    pub mastery_unlocks: Vec<MasteryUnlock>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub starting_locations: Vec<StartingLocation>,
    #[serde(default)]
    pub tips: Option<RichText>,
    #[serde(default)]
    pub walkthrough: Option<RichText>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Target {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub locations: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub routines: Vec<TargetRoutine>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vulnerabilities: Vec<String>,
}

/// One leg of a target's movement loop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TargetRoutine {
    /// Seconds from mission start
    pub time_start: u32,
    pub location: String,
    pub action: String,
    /// Seconds
    pub duration: u32,
    pub security_level: SecurityLevel,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Disguise {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Slug,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub access_areas: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub restricted_areas: Vec<String>,
    #[serde(default)]
    pub obtain_method: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub suspicious_to: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Slug,
    #[serde(rename = "type")]
    pub weapon_type: WeaponType,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub concealable: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub locations: Vec<String>,
    #[serde(default)]
    pub unlock_level: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub steps: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub required_items: Vec<String>,
    #[serde(default)]
    pub required_disguise: Option<String>,
    pub difficulty: OpportunityDifficulty,
    #[serde(default)]
    pub detailed_walkthrough: Option<RichText>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub challenge_type: ChallengeType,
    pub xp_reward: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub tips: Option<RichText>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MasteryUnlock {
    #[serde(rename = "_id")]
    pub id: String,
    /// Mastery level, 1 through 20
    pub level: u8,
    /// Name of the unlocked item or location
    pub unlock: String,
    #[serde(rename = "type")]
    pub unlock_type: MasteryUnlockType,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
}

/// Starting location stored inline on a mission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StartingLocation {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub location: String,
    pub unlock_level: u32,
    #[serde(default)]
    pub available_disguise: Option<String>,
}
