use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};
use uuid::Uuid;

pub type ItemId = Uuid;

/// Ordinal tier of an item, used both for sorting and for weighted-draw
/// probability bucketing. Declaration order is the ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumCount,
    Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Normal,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// Categorical classification of an item, the primary index dimension of
/// the database.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumCount,
    Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Common,
    Key,
    Weapon,
    Equipment,
    Consumable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identity within a catalog. Assigned at authoring time and
    /// never reassigned afterwards.
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Opaque asset path, resolved by the rendering layer.
    #[serde(default)]
    pub icon: String,
    #[serde(default = "default_max_stack")]
    pub max_stack: u32,
    #[serde(default)]
    pub weight: f32,
    pub rarity: Rarity,
    pub kind: ItemType,
}

fn default_max_stack() -> u32 {
    1
}

impl Item {
    /// Orders items by rarity alone. Equal rarities are genuinely equal,
    /// so this is a total preorder, not a strict order; `Ord` is not
    /// implemented because it would disagree with structural `PartialEq`.
    pub fn cmp_rarity(&self, other: &Item) -> Ordering {
        self.rarity.cmp(&other.rarity)
    }
}

impl Default for Item {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: "Unnamed Item".to_string(),
            description: "No description provided.".to_string(),
            icon: String::new(),
            max_stack: 1,
            weight: 0.0,
            rarity: Rarity::Normal,
            kind: ItemType::Common,
        }
    }
}
