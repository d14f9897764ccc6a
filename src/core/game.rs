//! The top-level driver: owns the hero, the current scene and every service
//! the scenes need, and advances one scene per input line.

use rand::Rng;
use std::io;

use crate::character::{Character, SaveManager};
use crate::core::constants::CHOICE_PROMPT;
use crate::core::errors::SaveError;
use crate::scenes::Scene;
use crate::ui::Console;
use crate::world::{Terrain, WorldMap};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Quit from the menu, or input ran out.
    Quit,
    /// The dragon is dead.
    Victory,
    /// The hero fell in battle.
    Defeat,
}

pub struct Game<C: Console, R: Rng> {
    pub(crate) console: C,
    pub(crate) rng: R,
    pub(crate) saves: SaveManager,
    pub(crate) map: WorldMap,
    pub(crate) hero: Character,
    pub(crate) scene: Scene,
    running: bool,
    outcome: Option<GameOutcome>,
}

impl<C: Console, R: Rng> Game<C, R> {
    /// New session sitting at the main menu on the standard map.
    pub fn new(console: C, rng: R, saves: SaveManager) -> Self {
        Self {
            console,
            rng,
            saves,
            map: WorldMap::standard(),
            hero: Character::default(),
            scene: Scene::Menu { show_rules: false },
            running: true,
            outcome: None,
        }
    }

    pub fn with_map(mut self, map: WorldMap) -> Self {
        self.map = map;
        self
    }

    pub fn hero(&self) -> &Character {
        &self.hero
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn map(&self) -> &WorldMap {
        &self.map
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Drops `hero` into the world, standing still, skipping the menu.
    pub fn resume(&mut self, hero: Character) {
        self.hero = hero;
        self.scene = Scene::Exploring { moving: false };
    }

    /// Plays until the session ends.
    pub fn run(&mut self) -> io::Result<GameOutcome> {
        while self.running {
            self.step()?;
        }
        Ok(self.outcome.unwrap_or(GameOutcome::Quit))
    }

    /// Runs the current scene once: render, read at most one choice, transition.
    pub fn step(&mut self) -> io::Result<()> {
        if !self.running {
            return Ok(());
        }

        let scene = std::mem::replace(&mut self.scene, Scene::Menu { show_rules: false });
        let next = match scene {
            Scene::Menu { show_rules } => self.menu_tick(show_rules)?,
            Scene::Exploring { moving } => self.explore_tick(moving)?,
            Scene::Fighting(encounter) => self.battle_tick(encounter)?,
            Scene::Shopping => self.shop_tick()?,
            Scene::Dialogue => self.dialogue_tick()?,
            Scene::BossGate => self.boss_gate_tick()?,
        };
        log::trace!("scene -> {}", next.name());
        self.scene = next;
        Ok(())
    }

    /// Ends the session. The first recorded outcome wins.
    pub(crate) fn finish(&mut self, outcome: GameOutcome) {
        self.running = false;
        if self.outcome.is_none() {
            log::info!("Session over: {:?}", outcome);
            self.outcome = Some(outcome);
        }
    }

    /// Reads one menu choice. Exhausted input ends the session.
    pub(crate) fn read_choice(&mut self) -> io::Result<Option<String>> {
        let choice = self.console.read_line(CHOICE_PROMPT)?;
        if choice.is_none() {
            self.finish(GameOutcome::Quit);
        }
        Ok(choice)
    }

    pub(crate) fn pause(&mut self) -> io::Result<()> {
        if !self.console.pause()? {
            self.finish(GameOutcome::Quit);
        }
        Ok(())
    }

    pub(crate) fn current_terrain(&self) -> Option<Terrain> {
        self.map.terrain_at(self.hero.x, self.hero.y)
    }

    /// Writes the hero to disk. Failures are logged and play continues.
    pub(crate) fn save_hero(&self) {
        match self.saves.save(&self.hero) {
            Ok(()) => log::trace!(
                "Saved {} to {}",
                self.hero.name,
                self.saves.save_path().display()
            ),
            Err(e) => log::warn!(
                "Could not save to {}: {}",
                self.saves.save_path().display(),
                e
            ),
        }
    }

    /// Reads the saved hero, rejecting positions that fall off this map.
    pub(crate) fn load_hero(&self) -> Result<Character, SaveError> {
        let hero = self.saves.load()?;
        if !self.map.contains(hero.x, hero.y) {
            return Err(SaveError::Invalid(format!(
                "position ({}, {}) is outside the {}x{} map",
                hero.x,
                hero.y,
                self.map.width(),
                self.map.height()
            )));
        }
        Ok(hero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ScriptedConsole;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_game(inputs: &[&str]) -> (Game<ScriptedConsole, ChaCha8Rng>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let saves = SaveManager::new(dir.path().join("player.json"));
        let game = Game::new(
            ScriptedConsole::new(inputs.iter().copied()),
            ChaCha8Rng::seed_from_u64(12345),
            saves,
        );
        (game, dir)
    }

    #[test]
    fn test_new_game_starts_at_menu() {
        let (game, _dir) = test_game(&[]);
        assert!(game.is_running());
        assert_eq!(game.scene(), &Scene::Menu { show_rules: false });
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_exhausted_input_quits() {
        let (mut game, _dir) = test_game(&[]);
        assert_eq!(game.run().unwrap(), GameOutcome::Quit);
        assert!(!game.is_running());
    }

    #[test]
    fn test_first_outcome_wins() {
        let (mut game, _dir) = test_game(&[]);
        game.finish(GameOutcome::Victory);
        game.finish(GameOutcome::Quit);
        assert_eq!(game.outcome(), Some(GameOutcome::Victory));
    }

    #[test]
    fn test_step_after_finish_is_noop() {
        let (mut game, _dir) = test_game(&["1"]);
        game.finish(GameOutcome::Quit);
        game.step().unwrap();
        assert_eq!(game.console().remaining_inputs(), 1);
    }

    #[test]
    fn test_load_rejects_off_map_position() {
        let (game, _dir) = test_game(&[]);
        let mut hero = Character::new_hero("Lost");
        hero.x = 7;
        game.saves.save(&hero).unwrap();
        assert!(matches!(game.load_hero(), Err(SaveError::Invalid(_))));

        hero.x = 6;
        game.saves.save(&hero).unwrap();
        assert_eq!(game.load_hero().unwrap(), hero);
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the save file should be makes every write fail
        let blocked = dir.path().join("player.json");
        std::fs::create_dir_all(blocked.join("occupied")).unwrap();
        let game = Game::new(
            ScriptedConsole::default(),
            ChaCha8Rng::seed_from_u64(1),
            SaveManager::new(&blocked),
        );
        game.save_hero();
        assert!(blocked.is_dir());
    }
}
