//! Dice helpers shared by encounters and loot.

use rand::Rng;

/// Draws an integer uniformly from `min..=max`.
///
/// Bounds given in the wrong order are swapped rather than panicking.
pub fn roll_inclusive(rng: &mut impl Rng, min: u32, max: u32) -> u32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(lo..=hi)
}

/// Returns true with `percent`% probability. Values above 100 always succeed.
pub fn roll_percent(rng: &mut impl Rng, percent: u32) -> bool {
    rng.gen_range(0..100) < percent
}
