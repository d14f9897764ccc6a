//! Runtime settings assembled from the command line.

use std::path::PathBuf;

use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::character::default_save_path;
use crate::core::errors::SaveError;

/// Environment variable that overrides the `-v` log filter.
pub const LOG_ENV_VAR: &str = "MOFDIN_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub save_path: PathBuf,
    /// Fixed seed for a reproducible run. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub verbosity: u8,
}

impl GameConfig {
    /// Settings for the given overrides. A missing save path falls back to
    /// `~/.mofdin/player.json`, which needs a home directory.
    pub fn resolve(
        save_path: Option<PathBuf>,
        seed: Option<u64>,
        verbosity: u8,
    ) -> Result<Self, SaveError> {
        let save_path = match save_path {
            Some(path) => path,
            None => default_save_path()?,
        };
        Ok(Self {
            save_path,
            seed,
            verbosity,
        })
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_explicit_save_path_is_kept() {
        let config = GameConfig::resolve(Some(PathBuf::from("/tmp/x.json")), None, 0).unwrap();
        assert_eq!(config.save_path, PathBuf::from("/tmp/x.json"));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_log_level_from_verbosity() {
        let mut config = GameConfig::resolve(Some(PathBuf::from("p.json")), None, 0).unwrap();
        assert_eq!(config.log_level(), LevelFilter::Warn);
        config.verbosity = 1;
        assert_eq!(config.log_level(), LevelFilter::Info);
        config.verbosity = 2;
        assert_eq!(config.log_level(), LevelFilter::Debug);
        config.verbosity = 9;
        assert_eq!(config.log_level(), LevelFilter::Trace);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = GameConfig::resolve(Some(PathBuf::from("p.json")), Some(99), 0).unwrap();
        let mut first = config.rng();
        let mut second = config.rng();
        let b: Vec<u32> = (0..8).map(|_| first.gen_range(0..1000)).collect();
        let c: Vec<u32> = (0..8).map(|_| second.gen_range(0..1000)).collect();
        assert_eq!(b, c);
    }
}
