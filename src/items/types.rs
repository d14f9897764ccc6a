use serde::{Deserialize, Serialize};

/// Broad category of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Weapon,
    Armor,
    Potion,
    Key,
}

/// A catalog entry. Items are value objects; inventories hold [`ItemId`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub name: &'static str,
    pub description: &'static str,
    /// Heal amount for potions, 0 otherwise.
    pub value: u32,
    pub kind: ItemKind,
}

pub const POTION: Item = Item {
    name: "Potion",
    description: "Restores 30 HP",
    value: 30,
    kind: ItemKind::Potion,
};

pub const ELIXIR: Item = Item {
    name: "Elixir",
    description: "Restores 50 HP",
    value: 50,
    kind: ItemKind::Potion,
};

pub const CAVE_KEY: Item = Item {
    name: "Key 5010",
    description: "Opens a locked door",
    value: 0,
    kind: ItemKind::Key,
};

/// Reference to one entry of the fixed item catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemId {
    Potion,
    Elixir,
    CaveKey,
}

impl ItemId {
    pub fn all() -> [ItemId; 3] {
        [ItemId::Potion, ItemId::Elixir, ItemId::CaveKey]
    }

    pub fn item(self) -> &'static Item {
        match self {
            ItemId::Potion => &POTION,
            ItemId::Elixir => &ELIXIR,
            ItemId::CaveKey => &CAVE_KEY,
        }
    }

    pub fn name(self) -> &'static str {
        self.item().name
    }

    pub fn is_healing(self) -> bool {
        self.item().kind == ItemKind::Potion && self.item().value > 0
    }
}
