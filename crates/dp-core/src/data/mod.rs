//! Static game data: the skill and shop catalogs.
//!
//! Both catalogs are closed enums resolved at compile time, not dynamic
//! registries. Each skill id maps to exactly one hardcoded decay or boost
//! modifier consulted by the engine.

mod items;
mod skills;

pub use items::{ItemId, ItemKind, ShopItem, shop_catalog};
pub use skills::{Skill, SkillId, skill_catalog};
