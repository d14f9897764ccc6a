use crate::character::Character;
use crate::core::constants::MAJOR_ATTACK_THRESHOLD;
use crate::items::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MajorVerdict {
    /// Too weak; come back later.
    Refused,
    GrantedKey,
    /// Strong enough, but already carrying a key.
    AlreadyHasKey,
}

/// Talks to the major. Strong heroes receive the cave key.
///
/// At most one key is handed out per held key, so repeat visits are harmless.
pub fn consult_major(hero: &mut Character) -> MajorVerdict {
    if hero.attack < MAJOR_ATTACK_THRESHOLD {
        return MajorVerdict::Refused;
    }
    if hero.has_item(ItemId::CaveKey) {
        return MajorVerdict::AlreadyHasKey;
    }
    hero.add_item(ItemId::CaveKey);
    log::info!("The major handed {} the cave key", hero.name);
    MajorVerdict::GrantedKey
}
