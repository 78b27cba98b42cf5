//! Shop items: cosmetic skins, furniture, and accessories

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Shop item category
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ItemKind {
    /// Equippable avatar look (sets the displayed role)
    Skin,
    /// Passive room decoration, always active once owned
    Furniture,
    /// Passive gear, always active once owned
    Accessory,
}

/// Purchasable shop item
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
pub enum ItemId {
    SkinCat,
    SkinRobot,
    SkinWizard,
    /// Ergonomic chair: energy decays 15% slower
    FurnChair,
    FurnPlant,
    FurnLamp,
    /// Mechanical keyboard: motivation decays 15% slower
    AccKeyboard,
    AccHeadphones,
}

/// Item descriptor for the shop UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopItem {
    pub id: ItemId,
    pub name: &'static str,
    pub kind: ItemKind,
    /// Price in coffee beans
    pub cost: u32,
    pub emoji: &'static str,
}

impl ItemId {
    /// Get the static descriptor for this item
    pub const fn descriptor(&self) -> ShopItem {
        match self {
            ItemId::SkinCat => ShopItem {
                id: ItemId::SkinCat,
                name: "Cat Coder",
                kind: ItemKind::Skin,
                cost: 50,
                emoji: "🐱",
            },
            ItemId::SkinRobot => ShopItem {
                id: ItemId::SkinRobot,
                name: "Code Bot",
                kind: ItemKind::Skin,
                cost: 80,
                emoji: "🤖",
            },
            ItemId::SkinWizard => ShopItem {
                id: ItemId::SkinWizard,
                name: "Code Wizard",
                kind: ItemKind::Skin,
                cost: 120,
                emoji: "🧙",
            },
            ItemId::FurnChair => ShopItem {
                id: ItemId::FurnChair,
                name: "Ergonomic Chair",
                kind: ItemKind::Furniture,
                cost: 80,
                emoji: "🪑",
            },
            ItemId::FurnPlant => ShopItem {
                id: ItemId::FurnPlant,
                name: "Desk Plant",
                kind: ItemKind::Furniture,
                cost: 40,
                emoji: "🪴",
            },
            ItemId::FurnLamp => ShopItem {
                id: ItemId::FurnLamp,
                name: "Desk Lamp",
                kind: ItemKind::Furniture,
                cost: 60,
                emoji: "💡",
            },
            ItemId::AccKeyboard => ShopItem {
                id: ItemId::AccKeyboard,
                name: "Mechanical Keyboard",
                kind: ItemKind::Accessory,
                cost: 90,
                emoji: "⌨️",
            },
            ItemId::AccHeadphones => ShopItem {
                id: ItemId::AccHeadphones,
                name: "Headphones",
                kind: ItemKind::Accessory,
                cost: 70,
                emoji: "🎧",
            },
        }
    }
}

/// All shop items, in catalog order
pub fn shop_catalog() -> Vec<ShopItem> {
    ItemId::iter().map(|id| id.descriptor()).collect()
}
