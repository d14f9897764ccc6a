use crate::core::constants::{DEFAULT_HERO_NAME, HERO_START_ATTACK, HERO_START_HP, MAX_NAME_LEN};
use crate::items::ItemId;
use serde::{Deserialize, Serialize};

/// The hero, or an enemy rolled for a single fight.
///
/// Enemies reuse the record; their `gold` is the reward paid on defeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub hp: u32,
    pub hp_max: u32,
    pub attack: u32,
    pub gold: u32,
    pub x: usize,
    pub y: usize,
    pub inventory: Vec<ItemId>,
}

impl Character {
    /// Creates a character at full health with no gold or items.
    pub fn new(name: impl Into<String>, hp_max: u32, attack: u32) -> Self {
        Self {
            name: name.into(),
            hp: hp_max,
            hp_max,
            attack,
            gold: 0,
            x: 0,
            y: 0,
            inventory: Vec::new(),
        }
    }

    /// Fresh hero for a new game: fixed stats, one potion, top-left corner.
    pub fn new_hero(name: impl Into<String>) -> Self {
        let mut hero = Self::new(name, HERO_START_HP, HERO_START_ATTACK);
        hero.add_item(ItemId::Potion);
        hero
    }

    /// Hits `target` for this character's attack power. Returns damage dealt.
    pub fn attack(&self, target: &mut Character) -> u32 {
        let dealt = self.attack.min(target.hp);
        target.hp = target.hp.saturating_sub(self.attack);
        dealt
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Restores hp up to `hp_max`. Returns the new hp.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.hp = self.hp.saturating_add(amount).min(self.hp_max);
        self.hp
    }

    pub fn has_item(&self, item: ItemId) -> bool {
        self.inventory.contains(&item)
    }

    pub fn count_item(&self, item: ItemId) -> usize {
        self.inventory.iter().filter(|&&i| i == item).count()
    }

    pub fn add_item(&mut self, item: ItemId) {
        self.inventory.push(item);
    }

    /// Removes one occurrence of `item`. Returns false if none was carried.
    pub fn use_item(&mut self, item: ItemId) -> bool {
        match self.inventory.iter().position(|&i| i == item) {
            Some(index) => {
                self.inventory.remove(index);
                true
            }
            None => false,
        }
    }

    /// Uses one healing item and heals by its value.
    ///
    /// Returns the new hp, or `None` if the item is not carried or does not heal.
    pub fn consume_healing(&mut self, item: ItemId) -> Option<u32> {
        if !item.is_healing() || !self.use_item(item) {
            return None;
        }
        Some(self.heal(item.item().value))
    }

    /// Comma separated item names in carry order, e.g. "Potion, Potion, Elixir".
    pub fn inventory_summary(&self) -> String {
        self.inventory
            .iter()
            .map(|item| item.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new_hero(DEFAULT_HERO_NAME)
    }
}

pub fn validate_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(format!("Name must be {} characters or less", MAX_NAME_LEN));
    }

    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_');

    if !valid_chars {
        return Err(
            "Name can only contain letters, numbers, spaces, hyphens, and underscores".to_string(),
        );
    }

    Ok(())
}
