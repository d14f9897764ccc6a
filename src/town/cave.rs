use crate::character::Character;
use crate::combat::{boss_encounter, Encounter};
use crate::core::errors::GateError;
use crate::items::ItemId;

/// Unlocks the dragon's cave, consuming one key.
pub fn open_cave(hero: &mut Character) -> Result<Encounter, GateError> {
    if !hero.use_item(ItemId::CaveKey) {
        return Err(GateError::MissingKey);
    }
    log::info!("{} unlocked the cave", hero.name);
    Ok(boss_encounter())
}
