//! The avatar record and its blob codec
//!
//! One mutable record owned by the engine, persisted as a single JSON
//! blob. Every field added after the first release loads with a serde
//! default so an old blob is repaired field-by-field, never rejected.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::data::{ItemId, SkillId};
use crate::mood::Mood;
use crate::quest::Quest;

/// Upper bound for all core stats
pub const STAT_MAX: f64 = 100.0;

/// The developer avatar
///
/// `health` and `mood` are derived; the engine recomputes them after every
/// state-affecting operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarState {
    // Core stats, clamped to [0, 100]
    pub energy: f64,
    pub motivation: f64,
    pub focus: f64,
    /// Mean of energy, motivation, and focus; never set independently
    pub health: f64,

    // Progression
    pub xp: u32,
    pub level: u32,
    /// Coffee beans, the single currency
    pub coffee: u32,

    pub mood: Mood,

    // Identity
    pub name: String,
    /// Displayed avatar skin (emoji); changed by equipping skin items
    pub role: String,

    // Unlocks; these sets only ever grow
    pub skills: HashSet<SkillId>,
    pub inventory: HashSet<ItemId>,

    /// Decay watermark (ms since epoch); advanced only by the tick step
    pub last_updated: i64,

    // Login-streak bookkeeping
    pub last_daily_bonus: i64,
    pub streak: u32,

    // Daily quests
    pub quests: Vec<Quest>,
    pub quest_streak: u32,
    pub daily_quests_completed: bool,

    pub tutorial_completed: bool,
}

impl Default for AvatarState {
    fn default() -> Self {
        Self {
            energy: STAT_MAX,
            motivation: STAT_MAX,
            focus: STAT_MAX,
            health: STAT_MAX,
            xp: 0,
            level: 1,
            coffee: 10,
            mood: Mood::Neutral,
            name: "Dev".to_string(),
            role: "🧑‍💻".to_string(),
            skills: HashSet::new(),
            inventory: HashSet::new(),
            last_updated: 0,
            last_daily_bonus: 0,
            streak: 0,
            quests: Vec::new(),
            quest_streak: 0,
            daily_quests_completed: false,
            tutorial_completed: false,
        }
    }
}

impl AvatarState {
    /// Create a fresh avatar with the decay watermark set to `now_ms`.
    ///
    /// `last_daily_bonus` stays at 0 so the first tick grants the first
    /// daily bonus and quest set immediately.
    pub fn new(now_ms: i64) -> Self {
        Self {
            last_updated: now_ms,
            ..Self::default()
        }
    }

    /// Clamp all core stats into [0, 100]
    pub fn clamp_stats(&mut self) {
        self.energy = self.energy.clamp(0.0, STAT_MAX);
        self.motivation = self.motivation.clamp(0.0, STAT_MAX);
        self.focus = self.focus.clamp(0.0, STAT_MAX);
    }

    /// Recompute health as the mean of the three core stats
    pub fn recompute_health(&mut self) {
        self.health = (self.energy + self.motivation + self.focus) / 3.0;
    }

    /// Add `amount` (may be negative) to energy, clamped
    pub fn boost_energy(&mut self, amount: f64) {
        self.energy = (self.energy + amount).clamp(0.0, STAT_MAX);
    }

    /// Add `amount` (may be negative) to motivation, clamped
    pub fn boost_motivation(&mut self, amount: f64) {
        self.motivation = (self.motivation + amount).clamp(0.0, STAT_MAX);
    }

    /// Add `amount` (may be negative) to focus, clamped
    pub fn boost_focus(&mut self, amount: f64) {
        self.focus = (self.focus + amount).clamp(0.0, STAT_MAX);
    }

    pub fn has_skill(&self, skill: SkillId) -> bool {
        self.skills.contains(&skill)
    }

    pub fn owns_item(&self, item: ItemId) -> bool {
        self.inventory.contains(&item)
    }

    /// Serialize to the opaque state blob
    pub fn to_blob(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from a state blob, backfilling any missing fields
    pub fn from_blob(blob: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(blob)
    }
}
