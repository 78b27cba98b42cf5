//! dp-core: avatar state engine for the developer pet.
//!
//! This crate contains all game rules with no file I/O: time-based stat
//! decay, mood classification, XP/leveling, daily quests, and the
//! shop/skill modifier system. Persistence goes through the [`StateStore`]
//! port, and time and randomness are injected so every rule is
//! deterministic under test.

pub mod clock;
pub mod data;
pub mod engine;
pub mod mood;
pub mod quest;
pub mod state;
pub mod store;

mod rng;
mod xp;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{ActionOutcome, Engine, Notification};
pub use mood::Mood;
pub use quest::{Quest, QuestKind};
pub use rng::GameRng;
pub use state::AvatarState;
pub use store::{MemoryStore, StateStore, StoreError};
