//! Scene handlers. Each one renders its block, reads at most one choice and
//! returns the scene to run next.

mod battle;
mod boss_gate;
mod dialogue;
mod explore;
mod menu;
mod shop;

pub use explore::ExploreCommand;

use crate::combat::Encounter;

/// The active top-level mode. Exactly one is live at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scene {
    Menu {
        show_rules: bool,
    },
    /// `moving` is set for the tick right after a successful step, which is
    /// the only time an encounter can be rolled.
    Exploring {
        moving: bool,
    },
    Fighting(Encounter),
    Shopping,
    Dialogue,
    BossGate,
}

impl Scene {
    pub fn name(&self) -> &'static str {
        match self {
            Scene::Menu { .. } => "menu",
            Scene::Exploring { .. } => "exploring",
            Scene::Fighting(_) => "fighting",
            Scene::Shopping => "shopping",
            Scene::Dialogue => "dialogue",
            Scene::BossGate => "boss gate",
        }
    }
}
