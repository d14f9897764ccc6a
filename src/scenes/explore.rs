use rand::Rng;
use std::io;

use super::Scene;
use crate::combat::roll_encounter;
use crate::core::constants::ENCOUNTER_CHANCE_PERCENT;
use crate::core::game::Game;
use crate::core::random::roll_percent;
use crate::items::ItemId;
use crate::ui::render;
use crate::ui::Console;
use crate::world::{Direction, Structure};

/// One command typed while wandering the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreCommand {
    SaveAndQuit,
    Move(Direction),
    Use(ItemId),
    Enter,
    /// Anything unrecognised: the hero stays put.
    Stand,
}

impl ExploreCommand {
    pub fn parse(input: &str) -> ExploreCommand {
        if let Some(direction) = Direction::from_key(input) {
            return ExploreCommand::Move(direction);
        }
        match input.trim() {
            "0" => ExploreCommand::SaveAndQuit,
            "1" => ExploreCommand::Use(ItemId::Potion),
            "2" => ExploreCommand::Use(ItemId::Elixir),
            "3" => ExploreCommand::Enter,
            _ => ExploreCommand::Stand,
        }
    }
}

const STANDING: Scene = Scene::Exploring { moving: false };

impl<C: Console, R: Rng> Game<C, R> {
    pub(crate) fn explore_tick(&mut self, moving: bool) -> io::Result<Scene> {
        self.save_hero();
        self.console.clear()?;

        let Some(terrain) = self.current_terrain() else {
            log::warn!(
                "{} is off the map at ({}, {}); returning to the start",
                self.hero.name,
                self.hero.x,
                self.hero.y
            );
            self.hero.x = 0;
            self.hero.y = 0;
            return Ok(STANDING);
        };

        if moving
            && terrain.triggers_encounters()
            && roll_percent(&mut self.rng, ENCOUNTER_CHANCE_PERCENT)
        {
            let encounter = roll_encounter(&mut self.rng);
            log::debug!(
                "{} ambushed {} in the {}",
                encounter.enemy.name,
                self.hero.name,
                terrain.display_text()
            );
            return Ok(Scene::Fighting(encounter));
        }

        let screen = render::exploration_screen(&self.hero, &self.map, terrain);
        self.console.print_all(&screen)?;

        let Some(choice) = self.read_choice()? else {
            return Ok(STANDING);
        };

        match ExploreCommand::parse(&choice) {
            ExploreCommand::SaveAndQuit => {
                self.save_hero();
                Ok(Scene::Menu { show_rules: false })
            }
            ExploreCommand::Move(direction) => {
                match self.map.step(self.hero.x, self.hero.y, direction) {
                    Some((x, y)) => {
                        self.hero.x = x;
                        self.hero.y = y;
                        log::debug!("{} moved {:?} to ({}, {})", self.hero.name, direction, x, y);
                        Ok(Scene::Exploring { moving: true })
                    }
                    None => Ok(STANDING),
                }
            }
            ExploreCommand::Use(item) => {
                let message = match self.hero.consume_healing(item) {
                    Some(hp) => render::healed_message(&self.hero, hp),
                    None => render::missing_item_message(item),
                };
                self.console.print(&message)?;
                self.pause()?;
                Ok(STANDING)
            }
            ExploreCommand::Enter => Ok(match terrain.structure() {
                Some(Structure::Shop) => Scene::Shopping,
                Some(Structure::Major) => Scene::Dialogue,
                Some(Structure::Cave) => Scene::BossGate,
                None => STANDING,
            }),
            ExploreCommand::Stand => Ok(STANDING),
        }
    }
}
