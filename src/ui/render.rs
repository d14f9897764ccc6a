//! Text blocks for each scene. Pure functions of game data so they can be
//! asserted on without a terminal.

use crate::character::Character;
use crate::combat::{CombatEvent, Encounter};
use crate::core::constants::SEPARATOR_LINE;
use crate::items::ItemId;
use crate::town::{MajorVerdict, ShopOffer};
use crate::world::{Direction, Terrain, WorldMap};

const RULES: [&str; 7] = [
    "1. Move around the map using the WASD keys.",
    "2. Defeat enemies to gain gold and items.",
    "3. Visit the shop to buy items and upgrade your weapon.",
    "4. Visit the major to get a key to face the dragon.",
    "5. Visit the cave to face the dragon.",
    "6. Use potions and elixirs to heal yourself.",
    "7. Good luck!",
];

fn sep() -> String {
    SEPARATOR_LINE.to_string()
}

fn item_option(number: u32, verb: &str, item: ItemId) -> String {
    format!(
        "{}. {} {} ({})",
        number,
        verb,
        item.name().to_uppercase(),
        item.item().description
    )
}

pub fn title_screen(show_rules: bool) -> Vec<String> {
    let mut lines = vec![
        sep(),
        "WELCOME TO THE MOFDIN ASCII GAME!".to_string(),
        "1. NEW GAME".to_string(),
        "2. LOAD GAME".to_string(),
        "3. RULES".to_string(),
        "4. QUIT GAME".to_string(),
        sep(),
    ];
    if show_rules {
        lines.push("RULES:".to_string());
        lines.extend(RULES.iter().map(|r| r.to_string()));
    }
    lines
}

/// Status sheet plus the commands available on the hero's current tile.
pub fn exploration_screen(hero: &Character, map: &WorldMap, terrain: Terrain) -> Vec<String> {
    let mut lines = vec![
        sep(),
        format!("LOCATION: {}", terrain.display_text()),
        sep(),
        format!("NAME: {}", hero.name),
        format!("HP: {}/{}", hero.hp, hero.hp_max),
        format!("ATK: {}", hero.attack),
        format!("INVENTORY: {}", hero.inventory_summary()),
        format!("GOLD: {}", hero.gold),
        format!("COORD: ({}, {})", hero.x, hero.y),
        sep(),
        "0. SAVE AND QUIT".to_string(),
    ];
    for direction in Direction::all() {
        if map.can_move(hero.x, hero.y, direction) {
            lines.push(format!("{}. MOVE {}", direction.key(), direction.label()));
        }
    }
    if hero.has_item(ItemId::Potion) {
        lines.push(item_option(1, "USE", ItemId::Potion));
    }
    if hero.has_item(ItemId::Elixir) {
        lines.push(item_option(2, "USE", ItemId::Elixir));
    }
    if terrain.structure().is_some() {
        lines.push("3. ENTER".to_string());
    }
    lines.push(sep());
    lines
}

pub fn battle_screen(hero: &Character, encounter: &Encounter) -> Vec<String> {
    let enemy = &encounter.enemy;
    let mut lines = vec![
        sep(),
        format!("Defeat the {}!", enemy.name),
        sep(),
        format!("{} HP: {}/{}", enemy.name, enemy.hp, enemy.hp_max),
        format!("{} HP: {}/{}", hero.name, hero.hp, hero.hp_max),
        format!("INVENTORY: {}", hero.inventory_summary()),
        sep(),
        "1. ATTACK".to_string(),
    ];
    if hero.has_item(ItemId::Potion) {
        lines.push(item_option(2, "USE", ItemId::Potion));
    }
    if hero.has_item(ItemId::Elixir) {
        lines.push(item_option(3, "USE", ItemId::Elixir));
    }
    lines.push(sep());
    lines
}

/// One line of battle narration.
pub fn describe_event(event: &CombatEvent, hero: &Character, enemy: &Character) -> String {
    match event {
        CombatEvent::HeroAttack { damage } => {
            format!("{} dealt {} damage to {}!", hero.name, damage, enemy.name)
        }
        CombatEvent::EnemyAttack { damage } => {
            format!("{} dealt {} damage to {}!", enemy.name, damage, hero.name)
        }
        CombatEvent::Healed { hp, .. } => healed_message(hero, *hp),
        CombatEvent::MissingItem { item } => missing_item_message(*item),
        CombatEvent::HeroDefeated => format!("{} defeated {}...", enemy.name, hero.name),
        CombatEvent::EnemyDefeated { gold } => {
            if *gold > 0 {
                format!(
                    "{} defeated the {}! You found {} gold!",
                    hero.name, enemy.name, gold
                )
            } else {
                format!("{} defeated the {}!", hero.name, enemy.name)
            }
        }
        CombatEvent::FoundPotion => "You've found a potion!".to_string(),
        CombatEvent::GameWon => "Congratulations, you've finished the game!".to_string(),
    }
}

pub fn healed_message(hero: &Character, hp: u32) -> String {
    format!("{}'s HP refilled to {}!", hero.name, hp)
}

pub fn missing_item_message(item: ItemId) -> String {
    match item {
        ItemId::Potion => "You have no potions!".to_string(),
        ItemId::Elixir => "You have no elixirs!".to_string(),
        ItemId::CaveKey => "You have no key!".to_string(),
    }
}

pub fn shop_screen(hero: &Character) -> Vec<String> {
    let mut lines = vec![
        sep(),
        "Welcome to the shop!".to_string(),
        sep(),
        format!("GOLD: {}", hero.gold),
        format!("INVENTORY: {}", hero.inventory_summary()),
        format!("ATK: {}", hero.attack),
        sep(),
    ];
    for (number, offer) in (1..).zip(ShopOffer::all()) {
        lines.push(format!(
            "{}. {} - {} GOLD",
            number,
            offer.label(),
            offer.cost()
        ));
    }
    lines.push("4. LEAVE".to_string());
    lines.push(sep());
    lines
}

pub fn major_screen(hero: &Character, verdict: MajorVerdict) -> Vec<String> {
    let speech = match verdict {
        MajorVerdict::Refused => {
            "You're not strong enough to face the dragon yet! Keep practicing and come back later!"
        }
        MajorVerdict::GrantedKey => {
            "You might want to take on the dragon now! Take this key but be careful with the beast!"
        }
        MajorVerdict::AlreadyHasKey => {
            "You already carry my key. The dragon waits in the cave to the north-east!"
        }
    };
    vec![
        sep(),
        format!("Hello there, {}!", hero.name),
        speech.to_string(),
        sep(),
        "1. LEAVE".to_string(),
        sep(),
    ]
}

pub fn cave_screen(hero: &Character) -> Vec<String> {
    let mut lines = vec![
        sep(),
        "Here lies the cave of the dragon. What will you do?".to_string(),
        sep(),
    ];
    if hero.has_item(ItemId::CaveKey) {
        lines.push("1. USE KEY".to_string());
    }
    lines.push("2. TURN BACK".to_string());
    lines.push(sep());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::GOBLIN;

    #[test]
    fn test_title_screen_rules_toggle() {
        assert_eq!(title_screen(false).len(), 7);
        let with_rules = title_screen(true);
        assert_eq!(with_rules.len(), 15);
        assert_eq!(with_rules[7], "RULES:");
    }

    #[test]
    fn test_exploration_screen_at_origin() {
        let map = WorldMap::standard();
        let hero = Character::new_hero("Hero");
        let lines = exploration_screen(&hero, &map, Terrain::Plains);
        assert!(lines.contains(&"LOCATION: PLAINS".to_string()));
        assert!(lines.contains(&"COORD: (0, 0)".to_string()));
        assert!(lines.contains(&"S. MOVE SOUTH".to_string()));
        assert!(lines.contains(&"D. MOVE EAST".to_string()));
        assert!(!lines.contains(&"W. MOVE NORTH".to_string()));
        assert!(!lines.contains(&"A. MOVE WEST".to_string()));
        assert!(lines.contains(&"1. USE POTION (Restores 30 HP)".to_string()));
        assert!(!lines.contains(&"3. ENTER".to_string()));
    }

    #[test]
    fn test_exploration_screen_offers_enter_on_shop() {
        let map = WorldMap::standard();
        let mut hero = Character::new("Hero", 50, 3);
        hero.x = 1;
        hero.y = 3;
        let lines = exploration_screen(&hero, &map, Terrain::Shop);
        assert!(lines.contains(&"3. ENTER".to_string()));
        assert!(lines.contains(&"INVENTORY: ".to_string()));
    }

    #[test]
    fn test_battle_narration() {
        let hero = Character::new("Hero", 50, 3);
        let goblin = GOBLIN.spawn(12);
        assert_eq!(
            describe_event(&CombatEvent::HeroAttack { damage: 3 }, &hero, &goblin),
            "Hero dealt 3 damage to Goblin!"
        );
        assert_eq!(
            describe_event(&CombatEvent::EnemyDefeated { gold: 12 }, &hero, &goblin),
            "Hero defeated the Goblin! You found 12 gold!"
        );
        assert_eq!(
            describe_event(&CombatEvent::EnemyDefeated { gold: 0 }, &hero, &goblin),
            "Hero defeated the Goblin!"
        );
    }

    #[test]
    fn test_shop_screen_lists_prices() {
        let hero = Character::new("Hero", 50, 3);
        let lines = shop_screen(&hero);
        assert!(lines.contains(&"1. BUY POTION (Restores 30 HP) - 5 GOLD".to_string()));
        assert!(lines.contains(&"2. BUY ELIXIR (Restores 50 HP) - 8 GOLD".to_string()));
        assert!(lines.contains(&"3. UPGRADE WEAPON (+2 ATK) - 10 GOLD".to_string()));
        assert!(lines.contains(&"4. LEAVE".to_string()));
    }

    #[test]
    fn test_cave_screen_hides_key_option_without_key() {
        let mut hero = Character::new("Hero", 50, 3);
        assert!(!cave_screen(&hero).contains(&"1. USE KEY".to_string()));
        hero.add_item(ItemId::CaveKey);
        assert!(cave_screen(&hero).contains(&"1. USE KEY".to_string()));
    }
}
