//! Overworld: terrain registry and the fixed tile grid.

#![allow(unused_imports)]

pub mod map;
pub mod terrain;

pub use map::*;
pub use terrain::*;
