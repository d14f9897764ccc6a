use rand::Rng;
use std::io;

use super::Scene;
use crate::character::{validate_name, Character};
use crate::core::game::{Game, GameOutcome};
use crate::ui::render;
use crate::ui::Console;

const NAME_PROMPT: &str = "# What is your name, hero? ";

impl<C: Console, R: Rng> Game<C, R> {
    pub(crate) fn menu_tick(&mut self, show_rules: bool) -> io::Result<Scene> {
        self.console.clear()?;
        self.console.print_all(&render::title_screen(show_rules))?;

        if show_rules {
            self.pause()?;
            return Ok(Scene::Menu { show_rules: false });
        }

        let Some(choice) = self.read_choice()? else {
            return Ok(Scene::Menu { show_rules: false });
        };

        match choice.trim() {
            "1" => self.start_new_game(),
            "2" => self.load_saved_game(),
            "3" => Ok(Scene::Menu { show_rules: true }),
            "4" => {
                self.console.print("Farewell, hero! Until next time.")?;
                self.finish(GameOutcome::Quit);
                Ok(Scene::Menu { show_rules: false })
            }
            _ => Ok(Scene::Menu { show_rules: false }),
        }
    }

    fn start_new_game(&mut self) -> io::Result<Scene> {
        self.console.clear()?;
        let Some(name) = self.console.read_line(NAME_PROMPT)? else {
            self.finish(GameOutcome::Quit);
            return Ok(Scene::Menu { show_rules: false });
        };

        if let Err(reason) = validate_name(&name) {
            self.console.print(&reason)?;
            self.pause()?;
            return Ok(Scene::Menu { show_rules: false });
        }

        let hero = Character::new_hero(name.trim());
        log::info!("New game started for {}", hero.name);
        self.resume(hero);
        Ok(Scene::Exploring { moving: false })
    }

    fn load_saved_game(&mut self) -> io::Result<Scene> {
        match self.load_hero() {
            Ok(hero) => {
                log::info!(
                    "Loaded {} from {}",
                    hero.name,
                    self.saves.save_path().display()
                );
                self.resume(hero);
                self.console.clear()?;
                self.console
                    .print(&format!("Welcome back, {}!", self.hero.name))?;
                self.pause()?;
                Ok(Scene::Exploring { moving: false })
            }
            Err(e) => {
                log::error!(
                    "Error loading player data from {}: {}",
                    self.saves.save_path().display(),
                    e
                );
                let message = if e.is_missing() {
                    "No saved game found.".to_string()
                } else {
                    format!("Could not load saved game: {}", e)
                };
                self.console.print(&message)?;
                self.pause()?;
                Ok(Scene::Menu { show_rules: false })
            }
        }
    }
}
