//! Passive skills purchasable with coffee beans

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Unlockable passive skill
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SkillId {
    /// Focus decays ~30% slower
    IronFocus,
    /// Coffee gives a bigger energy boost
    CaffeineTolerance,
    /// Double XP for fixing errors
    BugSlayer,
}

/// Skill descriptor for the shop UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub id: SkillId,
    pub name: &'static str,
    pub description: &'static str,
    /// Price in coffee beans
    pub cost: u32,
}

impl SkillId {
    /// Get the static descriptor for this skill
    pub const fn descriptor(&self) -> Skill {
        match self {
            SkillId::IronFocus => Skill {
                id: SkillId::IronFocus,
                name: "Iron Focus",
                description: "Your focus drains 30% slower.",
                cost: 150,
            },
            SkillId::CaffeineTolerance => Skill {
                id: SkillId::CaffeineTolerance,
                name: "Caffeine Tolerance",
                description: "Coffee restores 52 energy instead of 35.",
                cost: 100,
            },
            SkillId::BugSlayer => Skill {
                id: SkillId::BugSlayer,
                name: "Bug Slayer",
                description: "Earn double XP for every error you fix.",
                cost: 200,
            },
        }
    }
}

/// All skills, in catalog order
pub fn skill_catalog() -> Vec<Skill> {
    SkillId::iter().map(|id| id.descriptor()).collect()
}
