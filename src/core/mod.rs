//! Game driver, constants, errors and dice.

#![allow(unused_imports)]

pub mod constants;
pub mod errors;
pub mod game;
pub mod random;

pub use constants::*;
pub use errors::*;
pub use game::*;
pub use random::*;
