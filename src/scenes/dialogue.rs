use rand::Rng;
use std::io;

use super::Scene;
use crate::core::game::Game;
use crate::town::consult_major;
use crate::ui::render;
use crate::ui::Console;

impl<C: Console, R: Rng> Game<C, R> {
    pub(crate) fn dialogue_tick(&mut self) -> io::Result<Scene> {
        self.console.clear()?;
        let verdict = consult_major(&mut self.hero);
        self.console
            .print_all(&render::major_screen(&self.hero, verdict))?;

        match self.read_choice()?.as_deref().map(str::trim) {
            Some("1") => Ok(Scene::Exploring { moving: false }),
            _ => Ok(Scene::Dialogue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Character, SaveManager};
    use crate::items::ItemId;
    use crate::ui::ScriptedConsole;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn talk(attack: u32, inputs: &[&str]) -> Game<ScriptedConsole, ChaCha8Rng> {
        let dir = tempfile::tempdir().unwrap();
        let mut game = Game::new(
            ScriptedConsole::new(inputs.iter().copied()),
            ChaCha8Rng::seed_from_u64(5),
            SaveManager::new(dir.path().join("player.json")),
        );
        let mut hero = Character::new("Visitor", 50, attack);
        hero.x = 3;
        hero.y = 3;
        game.resume(hero);
        game.scene = Scene::Dialogue;
        while game.is_running() && game.scene() == &Scene::Dialogue {
            game.step().unwrap();
        }
        game
    }

    #[test]
    fn test_weak_hero_leaves_empty_handed() {
        let game = talk(3, &["1"]);
        assert!(!game.hero().has_item(ItemId::CaveKey));
        assert!(game.console().output().contains("not strong enough"));
        assert_eq!(game.scene(), &Scene::Exploring { moving: false });
    }

    #[test]
    fn test_lingering_does_not_duplicate_key() {
        let game = talk(12, &["", "x", "1"]);
        assert_eq!(game.hero().count_item(ItemId::CaveKey), 1);
        assert!(game.console().output().contains("Take this key"));
    }
}
