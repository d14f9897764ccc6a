use rand::Rng;
use std::io;

use super::Scene;
use crate::combat::{resolve_round, BattleAction, BattleOutcome, Encounter};
use crate::core::game::{Game, GameOutcome};
use crate::ui::render;
use crate::ui::Console;

impl<C: Console, R: Rng> Game<C, R> {
    pub(crate) fn battle_tick(&mut self, mut encounter: Encounter) -> io::Result<Scene> {
        self.console.clear()?;
        self.console
            .print_all(&render::battle_screen(&self.hero, &encounter))?;

        let Some(choice) = self.read_choice()? else {
            return Ok(Scene::Fighting(encounter));
        };
        // Unknown input: re-render the same round
        let Some(action) = BattleAction::parse(&choice) else {
            return Ok(Scene::Fighting(encounter));
        };

        let report = resolve_round(&mut self.hero, &mut encounter, action, &mut self.rng);
        for event in &report.events {
            let line = render::describe_event(event, &self.hero, &encounter.enemy);
            self.console.print(&line)?;
        }

        let next = match report.outcome {
            BattleOutcome::Ongoing => Scene::Fighting(encounter),
            BattleOutcome::HeroLost => {
                self.console.draw_line()?;
                self.console.print("GAME OVER!")?;
                log::info!("{} was slain by {}", self.hero.name, encounter.enemy.name);
                self.finish(GameOutcome::Defeat);
                Scene::Menu { show_rules: false }
            }
            BattleOutcome::HeroWon { boss: true } => {
                log::info!("{} slew the {}", self.hero.name, encounter.enemy.name);
                self.finish(GameOutcome::Victory);
                Scene::Menu { show_rules: false }
            }
            BattleOutcome::HeroWon { boss: false } => {
                log::debug!(
                    "{} beat {} and now has {} gold",
                    self.hero.name,
                    encounter.enemy.name,
                    self.hero.gold
                );
                Scene::Exploring { moving: false }
            }
        };

        self.pause()?;
        Ok(next)
    }
}
