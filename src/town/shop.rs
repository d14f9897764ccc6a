use crate::character::Character;
use crate::core::constants::{
    ELIXIR_PRICE, POTION_PRICE, WEAPON_UPGRADE_ATTACK, WEAPON_UPGRADE_PRICE,
};
use crate::core::errors::ShopError;
use crate::items::ItemId;

/// Something the shopkeeper sells. Stock is unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopOffer {
    Potion,
    Elixir,
    WeaponUpgrade,
}

impl ShopOffer {
    pub fn all() -> [ShopOffer; 3] {
        [
            ShopOffer::Potion,
            ShopOffer::Elixir,
            ShopOffer::WeaponUpgrade,
        ]
    }

    /// Parses a shop menu choice (`1`-`3`).
    pub fn parse(input: &str) -> Option<ShopOffer> {
        match input.trim() {
            "1" => Some(ShopOffer::Potion),
            "2" => Some(ShopOffer::Elixir),
            "3" => Some(ShopOffer::WeaponUpgrade),
            _ => None,
        }
    }

    pub fn cost(&self) -> u32 {
        match self {
            ShopOffer::Potion => POTION_PRICE,
            ShopOffer::Elixir => ELIXIR_PRICE,
            ShopOffer::WeaponUpgrade => WEAPON_UPGRADE_PRICE,
        }
    }

    pub fn label(&self) -> String {
        match self {
            ShopOffer::Potion => format!("BUY POTION ({})", ItemId::Potion.item().description),
            ShopOffer::Elixir => format!("BUY ELIXIR ({})", ItemId::Elixir.item().description),
            ShopOffer::WeaponUpgrade => {
                format!("UPGRADE WEAPON (+{} ATK)", WEAPON_UPGRADE_ATTACK)
            }
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            ShopOffer::Potion => "You've bought a potion!",
            ShopOffer::Elixir => "You've bought an elixir!",
            ShopOffer::WeaponUpgrade => "You've upgraded your weapon!",
        }
    }
}

/// Buys `offer` if the hero can afford it. On refusal nothing changes.
pub fn purchase(hero: &mut Character, offer: ShopOffer) -> Result<(), ShopError> {
    let cost = offer.cost();
    if hero.gold < cost {
        return Err(ShopError::NotEnoughGold {
            cost,
            gold: hero.gold,
        });
    }

    hero.gold -= cost;
    match offer {
        ShopOffer::Potion => hero.add_item(ItemId::Potion),
        ShopOffer::Elixir => hero.add_item(ItemId::Elixir),
        ShopOffer::WeaponUpgrade => hero.attack = hero.attack.saturating_add(WEAPON_UPGRADE_ATTACK),
    }
    log::debug!("{} bought {:?} for {} gold", hero.name, offer, cost);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buy_potion_with_exact_gold() {
        let mut hero = Character::new("Hero", 50, 3);
        hero.gold = 5;

        assert_eq!(purchase(&mut hero, ShopOffer::Potion), Ok(()));
        assert_eq!(hero.gold, 0);
        assert_eq!(hero.inventory, vec![ItemId::Potion]);

        let before = hero.clone();
        assert_eq!(
            purchase(&mut hero, ShopOffer::Potion),
            Err(ShopError::NotEnoughGold { cost: 5, gold: 0 })
        );
        assert_eq!(hero, before);
    }

    #[test]
    fn test_buy_elixir() {
        let mut hero = Character::new("Hero", 50, 3);
        hero.gold = 10;
        purchase(&mut hero, ShopOffer::Elixir).unwrap();
        assert_eq!(hero.gold, 2);
        assert!(hero.has_item(ItemId::Elixir));
    }

    #[test]
    fn test_weapon_upgrade() {
        let mut hero = Character::new("Hero", 50, 3);
        hero.gold = 25;
        purchase(&mut hero, ShopOffer::WeaponUpgrade).unwrap();
        purchase(&mut hero, ShopOffer::WeaponUpgrade).unwrap();
        assert_eq!(hero.attack, 7);
        assert_eq!(hero.gold, 5);
        assert!(hero.inventory.is_empty());
        assert!(purchase(&mut hero, ShopOffer::WeaponUpgrade).is_err());
        assert_eq!(hero.attack, 7);
    }

    #[test]
    fn test_parse_and_prices() {
        assert_eq!(ShopOffer::parse("1"), Some(ShopOffer::Potion));
        assert_eq!(ShopOffer::parse("2"), Some(ShopOffer::Elixir));
        assert_eq!(ShopOffer::parse("3"), Some(ShopOffer::WeaponUpgrade));
        assert_eq!(ShopOffer::parse("4"), None);
        let prices: Vec<u32> = ShopOffer::all().iter().map(|o| o.cost()).collect();
        assert_eq!(prices, vec![5, 8, 10]);
        assert_eq!(ShopOffer::Potion.label(), "BUY POTION (Restores 30 HP)");
    }
}
