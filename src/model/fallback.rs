//! Shapes of the built-in fallback dataset.
//!
//! Fallback missions embed their records directly instead of referencing them, and
//! identify everything by a short snake_case ID such as `viktor_novikov`.

use serde::{Deserialize, Serialize};

use crate::model::mission::{
    Challenge, Disguise, MasteryUnlock, MissionDifficulty, Opportunity, Target, Weapon,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FallbackMission {
    pub id: String,
    pub name: String,
    pub location: String,
    pub difficulty: MissionDifficulty,
    pub targets: Vec<Target>,
    pub disguises: Vec<Disguise>,
    pub weapons: Vec<Weapon>,
    pub opportunities: Vec<Opportunity>,
    pub challenges: Vec<Challenge>,
    pub mastery: Vec<MasteryUnlock>,
}

/// Starting location derived from a `Starting Location` mastery unlock.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FallbackStartingLocation {
    /// Unlock name with whitespace replaced by `_`, lowercased
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Location of the mission the unlock belongs to
    pub location: String,
    pub unlock_level: u32,
    /// ID of the disguise worn when starting here, if known
    pub available_disguise: Option<String>,
}

/// Kind of record held by the fallback index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    Mission,
    Target,
    Disguise,
    Weapon,
    Opportunity,
    Challenge,
    /// Keyed by unlock name rather than ID
    MasteryUnlock,
    StartingLocation,
}

impl RecordKind {
    pub const ALL: [RecordKind; 8] = [
        Self::Mission,
        Self::Target,
        Self::Disguise,
        Self::Weapon,
        Self::Opportunity,
        Self::Challenge,
        Self::MasteryUnlock,
        Self::StartingLocation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mission => "mission",
            Self::Target => "target",
            Self::Disguise => "disguise",
            Self::Weapon => "weapon",
            Self::Opportunity => "opportunity",
            Self::Challenge => "challenge",
            Self::MasteryUnlock => "mastery-unlock",
            Self::StartingLocation => "starting-location",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any record of the fallback dataset, serialized as the record itself.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum FallbackRecord {
    Mission(FallbackMission),
    Target(Target),
    Disguise(Disguise),
    Weapon(Weapon),
    Opportunity(Opportunity),
    Challenge(Challenge),
    MasteryUnlock(MasteryUnlock),
    StartingLocation(FallbackStartingLocation),
}
