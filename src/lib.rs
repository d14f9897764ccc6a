//! Mofdin - Terminal Text Adventure Library
//!
//! A hero wanders a small grid map, fights whatever jumps out of the grass,
//! shops in town, earns a key from the major and finally faces the dragon.
//! This module exposes the game logic for testing and for the binary.

pub mod build_info;
pub mod character;
pub mod combat;
pub mod config;
pub mod core;
pub mod items;
pub mod scenes;
pub mod town;
pub mod ui;
pub mod world;

pub use crate::character::{Character, SaveManager};
pub use crate::config::GameConfig;
pub use crate::core::errors::SaveError;
pub use crate::core::game::{Game, GameOutcome};
pub use crate::scenes::Scene;
pub use crate::ui::{Console, ScriptedConsole, TerminalConsole};
pub use crate::world::WorldMap;
