//! The avatar state engine
//!
//! Owns the single [`AvatarState`] record, applies time-based decay, turns
//! editor events and UI actions into stat/currency/XP deltas, and runs the
//! daily bonus and quest cycle. Driven externally by a periodic timer
//! (`tick`) and by event callbacks; each mutating operation runs to
//! completion, recomputes the derived fields, and persists through the
//! injected store.

use std::str::FromStr;

use crate::clock::Clock;
use crate::data::{ItemId, ItemKind, SkillId};
use crate::mood::Mood;
use crate::quest::{self, QuestKind};
use crate::rng::GameRng;
use crate::state::{AvatarState, STAT_MAX};
use crate::store::StateStore;

const MS_PER_HOUR: f64 = 3_600_000.0;
const DAY_MS: i64 = 24 * 60 * 60 * 1000;
/// A bonus gap under 48h counts as a consecutive-day login
const STREAK_WINDOW_MS: i64 = 2 * DAY_MS;

// Base decay rates, per hour of elapsed wall-clock time
const ENERGY_DECAY_PER_HOUR: f64 = 4.0;
const MOTIVATION_DECAY_PER_HOUR: f64 = 2.0;
const FOCUS_DECAY_PER_HOUR: f64 = 3.0;
/// Focus decay with the iron-focus skill (~30% slower)
const IRON_FOCUS_DECAY_PER_HOUR: f64 = 2.1;
/// Decay multiplier from the chair (energy) and keyboard (motivation)
const COMFORT_DECAY_FACTOR: f64 = 0.85;

/// Flat stat drain per active compiler/linter error, per tick
const ERROR_DRAIN_PER_ERROR: f64 = 0.05;

/// Ticks with a gap of 5+ minutes count as "returning from being away";
/// only shorter gaps accrue active coding time for time quests.
const ACTIVE_TICK_HOURS: f64 = 0.083;

const COFFEE_COST: u32 = 10;
const COFFEE_ENERGY_BOOST: f64 = 35.0;
const COFFEE_ENERGY_BOOST_TOLERANT: f64 = 52.0;

/// Outbound notification for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The avatar reached a new level
    LevelUp { level: u32 },
    /// A new day: coffee awarded and quests regenerated
    DailyBonus { coffee: u32, streak: u32 },
    /// A single quest hit its target
    QuestCompleted { id: String, reward: u32 },
    /// All three quests done; the streak bonus was paid
    AllQuestsCompleted { bonus: u32 },
}

/// Result of a user-facing action
///
/// Business-rule failures (insufficient coffee, already owned, bad id) are
/// reported here, never as errors; callers only show the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub success: bool,
    pub message: String,
}

impl ActionOutcome {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// The avatar state engine
pub struct Engine<S: StateStore, C: Clock> {
    state: AvatarState,
    store: S,
    clock: C,
    rng: GameRng,
    /// Last error count reported by the diagnostics hook (session-local)
    last_error_count: u32,
    notifications: Vec<Notification>,
}

impl<S: StateStore, C: Clock> Engine<S, C> {
    /// Load the persisted avatar, or create a fresh one.
    ///
    /// A corrupt blob falls back to defaults; a blob with a zero decay
    /// watermark is repaired to "now" so a stale watermark cannot zero
    /// the stats on the first tick.
    pub fn new(store: S, clock: C, rng: GameRng) -> Self {
        let now = clock.now_ms();
        let state = match store.get() {
            Some(blob) => {
                let mut state =
                    AvatarState::from_blob(&blob).unwrap_or_else(|_| AvatarState::new(now));
                if state.last_updated == 0 {
                    state.last_updated = now;
                }
                state
            }
            None => AvatarState::new(now),
        };

        let mut engine = Self {
            state,
            store,
            clock,
            rng,
            last_error_count: 0,
            notifications: Vec::new(),
        };
        engine.refresh_derived();
        engine
    }

    /// Immutable snapshot of the avatar; never exposes the live record
    pub fn snapshot(&self) -> AvatarState {
        self.state.clone()
    }

    /// Read access to the injected store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Drain pending notifications for the presentation layer
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Error count last reported through `update_error_count`
    pub fn error_count(&self) -> u32 {
        self.last_error_count
    }

    // --- Tick: decay, mood, daily bonus ---------------------------------

    /// Apply time-based decay since the last tick.
    ///
    /// Idempotent for a given "now": a zero-elapsed tick changes no stats.
    /// Always concludes with the daily-bonus check and a persist.
    pub fn tick(&mut self) {
        let now = self.clock.now_ms();
        let hours = (now - self.state.last_updated).max(0) as f64 / MS_PER_HOUR;

        if hours > 0.0 {
            let state = &mut self.state;

            let mut energy_rate = ENERGY_DECAY_PER_HOUR;
            if state.owns_item(ItemId::FurnChair) {
                energy_rate *= COMFORT_DECAY_FACTOR;
            }
            let mut motivation_rate = MOTIVATION_DECAY_PER_HOUR;
            if state.owns_item(ItemId::AccKeyboard) {
                motivation_rate *= COMFORT_DECAY_FACTOR;
            }
            let focus_rate = if state.has_skill(SkillId::IronFocus) {
                IRON_FOCUS_DECAY_PER_HOUR
            } else {
                FOCUS_DECAY_PER_HOUR
            };

            state.energy = (state.energy - energy_rate * hours).max(0.0);
            state.motivation = (state.motivation - motivation_rate * hours).max(0.0);
            state.focus = (state.focus - focus_rate * hours).max(0.0);

            // Linter stress: flat drain per tick, not scaled by time
            if self.last_error_count > 0 {
                let drain = self.last_error_count as f64 * ERROR_DRAIN_PER_ERROR;
                state.energy = (state.energy - drain).max(0.0);
                state.motivation = (state.motivation - drain).max(0.0);
            }

            state.last_updated = now;

            // Short gaps are active coding time; long gaps were offline and
            // must not count toward time quests.
            if hours < ACTIVE_TICK_HOURS {
                self.update_quest_progress(QuestKind::Time, hours * 60.0);
            }
        }

        self.check_daily_bonus(now);
        self.refresh_derived();
        self.persist();
    }

    fn check_daily_bonus(&mut self, now: i64) {
        let gap = now - self.state.last_daily_bonus;
        if gap < DAY_MS {
            return;
        }

        // The award uses the streak as of the previous day; the streak
        // itself then extends or restarts.
        let award = 20 + self.state.streak * 5;
        self.state.coffee += award;

        let consecutive = gap < STREAK_WINDOW_MS;
        if consecutive {
            self.state.streak += 1;
        } else {
            self.state.streak = 1;
        }
        self.state.last_daily_bonus = now;

        // The quest streak survives only a consecutive login with a fully
        // cleared quest board.
        if !consecutive || !self.state.daily_quests_completed {
            self.state.quest_streak = 0;
        }
        self.state.daily_quests_completed = false;
        self.state.quests = quest::generate_daily(&mut self.rng);

        self.notifications.push(Notification::DailyBonus {
            coffee: award,
            streak: self.state.streak,
        });
    }

    // --- Quests ----------------------------------------------------------

    /// Advance every active quest of the given kind by `amount`.
    ///
    /// Quest rewards are paid at the completion instant; when the last
    /// quest of the day completes, the streak bonus is paid on top.
    pub fn update_quest_progress(&mut self, kind: QuestKind, amount: f64) {
        if amount <= 0.0 {
            return;
        }

        let mut completed_now = Vec::new();
        for quest in &mut self.state.quests {
            if quest.kind == kind && !quest.completed {
                quest.progress += amount;
                if quest.progress >= quest.target {
                    quest.progress = quest.target;
                    quest.completed = true;
                    completed_now.push((quest.id.clone(), quest.reward));
                }
            }
        }

        for (id, reward) in completed_now {
            self.state.coffee += reward;
            self.notifications
                .push(Notification::QuestCompleted { id, reward });
        }

        if !self.state.quests.is_empty()
            && !self.state.daily_quests_completed
            && self.state.quests.iter().all(|q| q.completed)
        {
            self.state.daily_quests_completed = true;
            self.state.quest_streak += 1;
            let bonus = 50 + self.state.quest_streak * 10;
            self.state.coffee += bonus;
            self.notifications
                .push(Notification::AllQuestsCompleted { bonus });
        }
    }

    // --- Editor event hooks ----------------------------------------------

    /// File-save notification from the editor
    pub fn on_code_saved(&mut self) -> ActionOutcome {
        self.state.boost_motivation(3.0);
        self.state.coffee += 1;
        self.gain_xp(3.0);
        self.update_quest_progress(QuestKind::Save, 1.0);
        self.finish_action("Nice save! +1 bean")
    }

    /// Commit notification from source control
    pub fn on_git_commit(&mut self) -> ActionOutcome {
        self.state.boost_motivation(20.0);
        self.state.coffee += 5;
        self.gain_xp(50.0);
        self.update_quest_progress(QuestKind::Commit, 1.0);
        self.finish_action("Committed! +5 beans")
    }

    /// Diagnostics-changed notification with the current error count
    pub fn update_error_count(&mut self, current: u32) -> ActionOutcome {
        let previous = self.last_error_count;
        self.last_error_count = current;

        if current < previous {
            let fixed = previous - current;
            let multiplier = if self.state.has_skill(SkillId::BugSlayer) {
                2.0
            } else {
                1.0
            };
            self.gain_xp(fixed as f64 * 5.0 * multiplier);
            self.state.boost_motivation(fixed as f64);
            self.update_quest_progress(QuestKind::Fix, fixed as f64);
            self.finish_action(format!("Squashed {fixed} error(s)! 🐛"))
        } else if current > previous {
            let introduced = current - previous;
            self.state.boost_focus(-(introduced as f64) * 0.5);
            self.finish_action(format!("{introduced} new error(s)..."))
        } else {
            ActionOutcome::ok("No change in errors.")
        }
    }

    // --- UI actions -------------------------------------------------------

    /// Spend 10 beans on a cup of coffee
    pub fn give_coffee(&mut self) -> ActionOutcome {
        if self.state.coffee < COFFEE_COST {
            return ActionOutcome::fail("Not enough coffee beans! You need 10.");
        }
        self.state.coffee -= COFFEE_COST;

        let energy_boost = if self.state.has_skill(SkillId::CaffeineTolerance) {
            COFFEE_ENERGY_BOOST_TOLERANT
        } else {
            COFFEE_ENERGY_BOOST
        };
        self.state.boost_energy(energy_boost);
        self.state.boost_focus(20.0);
        self.state.boost_motivation(10.0);
        self.gain_xp(5.0);
        self.finish_action("Ahh, fresh coffee! ☕")
    }

    /// Rest: big energy/motivation recovery at a small focus cost.
    ///
    /// The XP reward scales with how much recovery was actually needed,
    /// computed from the pre-break values.
    pub fn take_break(&mut self) -> ActionOutcome {
        if self.state.energy >= STAT_MAX && self.state.motivation >= STAT_MAX {
            return ActionOutcome::fail("You're already fully rested!");
        }
        let pre_energy = self.state.energy;
        let pre_motivation = self.state.motivation;

        self.state.boost_energy(40.0);
        self.state.boost_motivation(15.0);
        self.state.boost_focus(-5.0);

        let raw = 5.0_f64
            .max(5.0 * (STAT_MAX - pre_energy) / 40.0)
            .max(5.0 * (STAT_MAX - pre_motivation) / 15.0);
        self.gain_xp(raw);
        self.finish_action("You stretch your legs. Much better! 🌴")
    }

    /// Unlock a skill by its wire id (e.g. "iron_focus")
    pub fn unlock_skill(&mut self, id: &str) -> ActionOutcome {
        let Ok(skill) = SkillId::from_str(id) else {
            return ActionOutcome::fail(format!("Unknown skill: {id}"));
        };
        if self.state.has_skill(skill) {
            return ActionOutcome::fail("You already know that skill.");
        }
        let descriptor = skill.descriptor();
        if self.state.coffee < descriptor.cost {
            return ActionOutcome::fail(format!(
                "Not enough beans: {} costs {}.",
                descriptor.name, descriptor.cost
            ));
        }
        self.state.coffee -= descriptor.cost;
        self.state.skills.insert(skill);
        self.finish_action(format!("Unlocked {}!", descriptor.name))
    }

    /// Buy a shop item by its wire id; skins auto-equip
    pub fn buy_item(&mut self, id: &str) -> ActionOutcome {
        let Ok(item) = ItemId::from_str(id) else {
            return ActionOutcome::fail(format!("Unknown item: {id}"));
        };
        if self.state.owns_item(item) {
            return ActionOutcome::fail("You already own that item.");
        }
        let descriptor = item.descriptor();
        if self.state.coffee < descriptor.cost {
            return ActionOutcome::fail(format!(
                "Not enough beans: {} costs {}.",
                descriptor.name, descriptor.cost
            ));
        }
        self.state.coffee -= descriptor.cost;
        self.state.inventory.insert(item);
        if descriptor.kind == ItemKind::Skin {
            self.state.role = descriptor.emoji.to_string();
        }
        self.finish_action(format!("Bought {} {}!", descriptor.emoji, descriptor.name))
    }

    /// Equip an owned skin
    pub fn equip_item(&mut self, id: &str) -> ActionOutcome {
        let Ok(item) = ItemId::from_str(id) else {
            return ActionOutcome::fail(format!("Unknown item: {id}"));
        };
        if !self.state.owns_item(item) {
            return ActionOutcome::fail("You don't own that item.");
        }
        let descriptor = item.descriptor();
        if descriptor.kind != ItemKind::Skin {
            return ActionOutcome::fail("That item can't be equipped.");
        }
        self.state.role = descriptor.emoji.to_string();
        self.finish_action(format!("Equipped {} {}!", descriptor.emoji, descriptor.name))
    }

    /// Mini-game finished with the given score.
    ///
    /// The cubic reward curve pays high scores disproportionately.
    pub fn challenge_completed(&mut self, score: u32) -> ActionOutcome {
        let earned = score / 10;
        self.state.coffee += earned;
        self.state.boost_motivation(20.0);

        let s = score as f64;
        let raw = s + s.powi(2) / 10_000.0 + s.powi(3) / 100_000.0;
        self.gain_xp(raw);
        self.finish_action(format!("Challenge complete! +{earned} beans 🏆"))
    }

    /// Record that the intro walkthrough has been seen
    pub fn complete_tutorial(&mut self) {
        if !self.state.tutorial_completed {
            self.state.tutorial_completed = true;
            self.persist();
        }
    }

    /// Rename the developer
    pub fn rename(&mut self, name: &str) -> ActionOutcome {
        self.state.name = name.to_string();
        self.finish_action(format!("Hello, {name}!"))
    }

    /// Replace the entire state with defaults. The caller confirms first.
    pub fn reset_progress(&mut self) -> ActionOutcome {
        let now = self.clock.now_ms();
        self.state = AvatarState::new(now);
        self.finish_action("Progress reset. A fresh start!")
    }

    // --- Internals --------------------------------------------------------

    fn gain_xp(&mut self, raw: f64) {
        if let Some(level) = self.state.gain_xp(raw) {
            self.notifications.push(Notification::LevelUp { level });
        }
    }

    /// Recompute derived fields so callers always see consistent values
    fn refresh_derived(&mut self) {
        self.state.clamp_stats();
        self.state.recompute_health();
        self.state.mood = Mood::classify(&self.state, self.clock.local_hour());
    }

    /// Best-effort persist; a failed write never interrupts the session
    fn persist(&mut self) {
        if let Ok(blob) = self.state.to_blob() {
            let _ = self.store.put(&blob);
        }
    }

    fn finish_action(&mut self, message: impl Into<String>) -> ActionOutcome {
        self.refresh_derived();
        self.persist();
        ActionOutcome::ok(message)
    }
}
