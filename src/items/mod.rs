//! Item catalog: potions, elixirs and the cave key.

pub mod types;

pub use types::*;
