use rand::Rng;
use std::io;

use super::Scene;
use crate::core::game::Game;
use crate::town::open_cave;
use crate::ui::render;
use crate::ui::Console;

impl<C: Console, R: Rng> Game<C, R> {
    pub(crate) fn boss_gate_tick(&mut self) -> io::Result<Scene> {
        self.console.clear()?;
        self.console.print_all(&render::cave_screen(&self.hero))?;

        let Some(choice) = self.read_choice()? else {
            return Ok(Scene::BossGate);
        };

        match choice.trim() {
            "1" => match open_cave(&mut self.hero) {
                Ok(encounter) => Ok(Scene::Fighting(encounter)),
                Err(e) => {
                    self.console.print(&e.to_string())?;
                    self.pause()?;
                    Ok(Scene::BossGate)
                }
            },
            "2" => Ok(Scene::Exploring { moving: false }),
            _ => Ok(Scene::BossGate),
        }
    }
}
