use rand::Rng;

use super::types::Encounter;
use crate::character::Character;
use crate::core::constants::POTION_DROP_CHANCE_PERCENT;
use crate::core::random::roll_percent;
use crate::items::ItemId;

/// What the hero does with their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleAction {
    Attack,
    UsePotion,
    UseElixir,
}

impl BattleAction {
    /// Parses a battle menu choice. Unknown input yields `None`.
    pub fn parse(input: &str) -> Option<BattleAction> {
        match input.trim() {
            "1" => Some(BattleAction::Attack),
            "2" => Some(BattleAction::UsePotion),
            "3" => Some(BattleAction::UseElixir),
            _ => None,
        }
    }

    pub fn item(&self) -> Option<ItemId> {
        match self {
            BattleAction::Attack => None,
            BattleAction::UsePotion => Some(ItemId::Potion),
            BattleAction::UseElixir => Some(ItemId::Elixir),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    HeroAttack {
        damage: u32,
    },
    EnemyAttack {
        damage: u32,
    },
    Healed {
        item: ItemId,
        hp: u32,
    },
    /// The hero reached for an item they do not carry. The turn is not spent.
    MissingItem {
        item: ItemId,
    },
    HeroDefeated,
    EnemyDefeated {
        gold: u32,
    },
    FoundPotion,
    /// The final boss fell.
    GameWon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Ongoing,
    HeroWon { boss: bool },
    HeroLost,
}

impl BattleOutcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, BattleOutcome::Ongoing)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub events: Vec<CombatEvent>,
    pub outcome: BattleOutcome,
}

/// Resolves one round of a fight.
///
/// The hero always acts first. The enemy strikes back only if it is still
/// standing afterwards, so both sides can never fall in the same round.
/// Drinking a potion does not grant a free turn.
pub fn resolve_round(
    hero: &mut Character,
    encounter: &mut Encounter,
    action: BattleAction,
    rng: &mut impl Rng,
) -> RoundReport {
    let mut events = Vec::new();
    let enemy = &mut encounter.enemy;

    match action.item() {
        None => {
            let damage = hero.attack(enemy);
            events.push(CombatEvent::HeroAttack { damage });
        }
        Some(item) => match hero.consume_healing(item) {
            Some(hp) => events.push(CombatEvent::Healed { item, hp }),
            None => {
                events.push(CombatEvent::MissingItem { item });
                return RoundReport {
                    events,
                    outcome: BattleOutcome::Ongoing,
                };
            }
        },
    }

    if enemy.is_alive() {
        let damage = enemy.attack(hero);
        events.push(CombatEvent::EnemyAttack { damage });
    }

    let outcome = if !hero.is_alive() {
        events.push(CombatEvent::HeroDefeated);
        BattleOutcome::HeroLost
    } else if !enemy.is_alive() {
        hero.gold = hero.gold.saturating_add(enemy.gold);
        events.push(CombatEvent::EnemyDefeated { gold: enemy.gold });

        if roll_percent(rng, POTION_DROP_CHANCE_PERCENT) {
            hero.add_item(ItemId::Potion);
            events.push(CombatEvent::FoundPotion);
        }
        if encounter.is_boss {
            events.push(CombatEvent::GameWon);
        }
        BattleOutcome::HeroWon {
            boss: encounter.is_boss,
        }
    } else {
        BattleOutcome::Ongoing
    };

    RoundReport { events, outcome }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::types::{boss_encounter, GOBLIN};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn goblin_fight(gold: u32) -> Encounter {
        Encounter::wild(GOBLIN.spawn(gold))
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(BattleAction::parse("1"), Some(BattleAction::Attack));
        assert_eq!(BattleAction::parse(" 2 "), Some(BattleAction::UsePotion));
        assert_eq!(BattleAction::parse("3"), Some(BattleAction::UseElixir));
        assert_eq!(BattleAction::parse("4"), None);
        assert_eq!(BattleAction::parse("attack"), None);
    }

    #[test]
    fn test_hero_beats_goblin_in_five_attacks() {
        let mut rng = create_test_rng();
        let mut hero = Character::new("Hero", 50, 3);
        let mut fight = goblin_fight(40);

        for round in 1..=4 {
            let report = resolve_round(&mut hero, &mut fight, BattleAction::Attack, &mut rng);
            assert_eq!(report.outcome, BattleOutcome::Ongoing, "round {}", round);
            assert_eq!(fight.enemy.hp, 15 - 3 * round);
        }
        assert_eq!(hero.hp, 50 - 4 * 3);

        let report = resolve_round(&mut hero, &mut fight, BattleAction::Attack, &mut rng);
        assert_eq!(report.outcome, BattleOutcome::HeroWon { boss: false });
        assert_eq!(fight.enemy.hp, 0);
        // Dead goblins do not hit back
        assert_eq!(hero.hp, 38);
        assert_eq!(hero.gold, 40);
        assert!(report
            .events
            .contains(&CombatEvent::EnemyDefeated { gold: 40 }));
        assert!(!report.events.contains(&CombatEvent::GameWon));

        let found = report.events.contains(&CombatEvent::FoundPotion);
        assert_eq!(hero.has_item(ItemId::Potion), found);
    }

    #[test]
    fn test_counter_attack_only_when_enemy_survives() {
        let mut rng = create_test_rng();
        for enemy_hp in 1..=10 {
            let mut hero = Character::new("Hero", 50, 5);
            let mut fight = goblin_fight(10);
            fight.enemy.hp = enemy_hp;

            let report = resolve_round(&mut hero, &mut fight, BattleAction::Attack, &mut rng);
            let countered = report
                .events
                .iter()
                .any(|e| matches!(e, CombatEvent::EnemyAttack { .. }));
            assert_eq!(countered, enemy_hp > 5, "enemy hp {}", enemy_hp);
            assert_eq!(hero.hp == 50, enemy_hp <= 5);
        }
    }

    #[test]
    fn test_healing_still_provokes_counter_attack() {
        let mut rng = create_test_rng();
        let mut hero = Character::new_hero("Hero");
        hero.hp = 10;
        let mut fight = goblin_fight(10);

        let report = resolve_round(&mut hero, &mut fight, BattleAction::UsePotion, &mut rng);
        assert_eq!(
            report.events,
            vec![
                CombatEvent::Healed {
                    item: ItemId::Potion,
                    hp: 40
                },
                CombatEvent::EnemyAttack { damage: 3 },
            ]
        );
        assert_eq!(hero.hp, 37);
        assert_eq!(fight.enemy.hp, 15);
        assert!(!hero.has_item(ItemId::Potion));
    }

    #[test]
    fn test_missing_item_spends_no_turn() {
        let mut rng = create_test_rng();
        let mut hero = Character::new("Hero", 50, 3);
        let mut fight = goblin_fight(10);
        let before = hero.clone();

        let report = resolve_round(&mut hero, &mut fight, BattleAction::UseElixir, &mut rng);
        assert_eq!(
            report.events,
            vec![CombatEvent::MissingItem {
                item: ItemId::Elixir
            }]
        );
        assert_eq!(report.outcome, BattleOutcome::Ongoing);
        assert_eq!(hero, before);
        assert_eq!(fight.enemy.hp, 15);
    }

    #[test]
    fn test_hero_can_die() {
        let mut rng = create_test_rng();
        let mut hero = Character::new("Hero", 50, 1);
        hero.hp = 8;
        let mut fight = boss_encounter();

        let report = resolve_round(&mut hero, &mut fight, BattleAction::Attack, &mut rng);
        assert_eq!(report.outcome, BattleOutcome::HeroLost);
        assert_eq!(hero.hp, 0);
        assert_eq!(report.events.last(), Some(&CombatEvent::HeroDefeated));
        assert!(report.outcome.is_over());
    }

    #[test]
    fn test_slaying_the_dragon_wins_the_game() {
        let mut rng = create_test_rng();
        let mut hero = Character::new("Hero", 50, 100);
        let mut fight = boss_encounter();

        let report = resolve_round(&mut hero, &mut fight, BattleAction::Attack, &mut rng);
        assert_eq!(report.outcome, BattleOutcome::HeroWon { boss: true });
        assert_eq!(report.events.last(), Some(&CombatEvent::GameWon));
        assert_eq!(hero.hp, 50);
    }

    #[test]
    fn test_potion_drop_rate() {
        let mut rng = create_test_rng();
        let mut drops = 0;
        for _ in 0..2_000 {
            let mut hero = Character::new("Hero", 50, 100);
            let mut fight = goblin_fight(8);
            let report = resolve_round(&mut hero, &mut fight, BattleAction::Attack, &mut rng);
            if report.events.contains(&CombatEvent::FoundPotion) {
                drops += 1;
            }
        }
        assert!((450..750).contains(&drops), "drops = {}", drops);
    }
}
