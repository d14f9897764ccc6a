//! JSON persistence for the hero record.
//!
//! The save file is the `Character` itself, pretty-printed. Writes go to a
//! temp file in the same directory and are renamed over the target so a
//! crash mid-write never leaves a truncated save behind.

use super::types::Character;
use crate::core::constants::{SAVE_DIR_NAME, SAVE_FILE_NAME};
use crate::core::errors::SaveError;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Get the default save path, `~/.mofdin/player.json`.
pub fn default_save_path() -> Result<PathBuf, SaveError> {
    let home_dir = dirs::home_dir().ok_or(SaveError::NoHomeDir)?;
    Ok(home_dir.join(SAVE_DIR_NAME).join(SAVE_FILE_NAME))
}

/// Reads and writes the single hero save file.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    pub fn new(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Writes the hero record, creating the parent directory if needed.
    pub fn save(&self, hero: &Character) -> Result<(), SaveError> {
        let json = serde_json::to_string_pretty(hero)?;
        write_atomic(&self.save_path, json.as_bytes())?;
        Ok(())
    }

    /// Reads the hero record back wholesale.
    ///
    /// Fails if the file is missing or is not valid JSON, and rejects a hero
    /// that is dead or holds more hp than its own maximum. Map bounds are
    /// checked by the caller, which owns the map.
    pub fn load(&self) -> Result<Character, SaveError> {
        let json = fs::read_to_string(&self.save_path)?;
        let hero: Character = serde_json::from_str(&json)?;

        if hero.hp == 0 {
            return Err(SaveError::Invalid(format!("{} has no hp left", hero.name)));
        }
        if hero.hp > hero.hp_max {
            return Err(SaveError::Invalid(format!(
                "hp {} exceeds maximum {}",
                hero.hp, hero.hp_max
            )));
        }

        Ok(hero)
    }
}

fn write_atomic(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let base = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(SAVE_FILE_NAME);

    let mut counter = 0u32;
    let tmp_path = loop {
        let candidate = dir.join(format!(".{}.tmp-{}-{}", base, std::process::id(), counter));
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
        {
            Ok(mut tmp) => {
                if let Err(e) = tmp.write_all(content).and_then(|_| tmp.sync_all()) {
                    let _ = fs::remove_file(&candidate);
                    return Err(e);
                }
                break candidate;
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                counter = counter.saturating_add(1);
            }
            Err(e) => return Err(e),
        }
    };

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    if let Ok(dir_file) = File::open(dir) {
        let _ = dir_file.sync_all();
    }
    Ok(())
}
