//! Daily quests
//!
//! Three quests are drawn from a fixed catalog of eight templates each
//! daily-bonus cycle. Progress only ever moves toward the target and
//! `completed` is a one-way latch; rewards are paid at the completion
//! instant by the engine.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::rng::GameRng;

/// What kind of editor activity a quest counts
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum QuestKind {
    /// File saves
    Save,
    /// Version-control commits
    Commit,
    /// Errors fixed
    Fix,
    /// Minutes of active coding
    Time,
}

/// One active daily quest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub description: String,
    pub kind: QuestKind,
    pub target: f64,
    #[serde(default)]
    pub progress: f64,
    /// Coffee beans paid on completion
    pub reward: u32,
    #[serde(default)]
    pub completed: bool,
}

struct QuestTemplate {
    id: &'static str,
    description: &'static str,
    kind: QuestKind,
    target: f64,
    reward: u32,
}

impl QuestTemplate {
    fn instantiate(&self) -> Quest {
        Quest {
            id: self.id.to_string(),
            description: self.description.to_string(),
            kind: self.kind,
            target: self.target,
            progress: 0.0,
            reward: self.reward,
            completed: false,
        }
    }
}

/// The fixed quest catalog: two difficulty tiers per kind
const TEMPLATES: [QuestTemplate; 8] = [
    QuestTemplate {
        id: "save_sprint",
        description: "Save your work 10 times",
        kind: QuestKind::Save,
        target: 10.0,
        reward: 15,
    },
    QuestTemplate {
        id: "save_marathon",
        description: "Save your work 30 times",
        kind: QuestKind::Save,
        target: 30.0,
        reward: 40,
    },
    QuestTemplate {
        id: "commit_single",
        description: "Make a commit",
        kind: QuestKind::Commit,
        target: 1.0,
        reward: 20,
    },
    QuestTemplate {
        id: "commit_triple",
        description: "Make 3 commits",
        kind: QuestKind::Commit,
        target: 3.0,
        reward: 50,
    },
    QuestTemplate {
        id: "fix_few",
        description: "Fix 3 errors",
        kind: QuestKind::Fix,
        target: 3.0,
        reward: 25,
    },
    QuestTemplate {
        id: "fix_swarm",
        description: "Fix 10 errors",
        kind: QuestKind::Fix,
        target: 10.0,
        reward: 60,
    },
    QuestTemplate {
        id: "time_focus",
        description: "Code for 30 minutes",
        kind: QuestKind::Time,
        target: 30.0,
        reward: 20,
    },
    QuestTemplate {
        id: "time_deep",
        description: "Code for 60 minutes",
        kind: QuestKind::Time,
        target: 60.0,
        reward: 45,
    },
];

/// Draw the daily set: 3 distinct templates, sampled without replacement
pub fn generate_daily(rng: &mut GameRng) -> Vec<Quest> {
    rng.sample_indices(TEMPLATES.len(), 3)
        .into_iter()
        .map(|i| TEMPLATES[i].instantiate())
        .collect()
}
