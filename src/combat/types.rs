use rand::seq::SliceRandom;
use rand::Rng;

use crate::character::Character;
use crate::core::constants::{ENEMY_GOLD_MAX, ENEMY_GOLD_MIN};
use crate::core::random::roll_inclusive;

/// Base stats an enemy is instantiated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyTemplate {
    pub name: &'static str,
    pub hp: u32,
    pub attack: u32,
}

impl EnemyTemplate {
    /// Fresh enemy at full health carrying `gold` as its reward.
    pub fn spawn(&self, gold: u32) -> Character {
        let mut enemy = Character::new(self.name, self.hp, self.attack);
        enemy.gold = gold;
        enemy
    }
}

pub const GOBLIN: EnemyTemplate = EnemyTemplate {
    name: "Goblin",
    hp: 15,
    attack: 3,
};

pub const ORC: EnemyTemplate = EnemyTemplate {
    name: "Orc",
    hp: 35,
    attack: 5,
};

pub const SLIME: EnemyTemplate = EnemyTemplate {
    name: "Slime",
    hp: 30,
    attack: 2,
};

pub const DRAGON: EnemyTemplate = EnemyTemplate {
    name: "Dragon",
    hp: 100,
    attack: 8,
};

pub const DRAGON_GOLD: u32 = 0;

/// Enemies that roam the overworld. The dragon is never drawn from here.
pub const WILD_ENEMIES: [EnemyTemplate; 3] = [GOBLIN, ORC, SLIME];

/// One fight: the enemy and whether it is the final boss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encounter {
    pub enemy: Character,
    pub is_boss: bool,
}

impl Encounter {
    pub fn wild(enemy: Character) -> Self {
        Self {
            enemy,
            is_boss: false,
        }
    }
}

/// Rolls a random overworld enemy with a random gold reward.
pub fn roll_encounter(rng: &mut impl Rng) -> Encounter {
    let template = WILD_ENEMIES.choose(rng).copied().unwrap_or(GOBLIN);
    let gold = roll_inclusive(rng, ENEMY_GOLD_MIN, ENEMY_GOLD_MAX);
    Encounter::wild(template.spawn(gold))
}

/// The dragon behind the cave door. Always the same stats.
pub fn boss_encounter() -> Encounter {
    Encounter {
        enemy: DRAGON.spawn(DRAGON_GOLD),
        is_boss: true,
    }
}
