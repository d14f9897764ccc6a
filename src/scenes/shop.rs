use rand::Rng;
use std::io;

use super::Scene;
use crate::core::game::Game;
use crate::town::{purchase, ShopOffer};
use crate::ui::render;
use crate::ui::Console;

const LEAVE: &str = "4";

impl<C: Console, R: Rng> Game<C, R> {
    pub(crate) fn shop_tick(&mut self) -> io::Result<Scene> {
        self.console.clear()?;
        self.console.print_all(&render::shop_screen(&self.hero))?;

        let Some(choice) = self.read_choice()? else {
            return Ok(Scene::Shopping);
        };
        if choice.trim() == LEAVE {
            return Ok(Scene::Exploring { moving: false });
        }
        let Some(offer) = ShopOffer::parse(&choice) else {
            return Ok(Scene::Shopping);
        };

        let message = match purchase(&mut self.hero, offer) {
            Ok(()) => offer.success_message().to_string(),
            Err(e) => e.to_string(),
        };
        self.console.print(&message)?;
        self.pause()?;
        Ok(Scene::Shopping)
    }
}
