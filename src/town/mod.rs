//! Buildings the hero can enter: the shop, the major's office and the cave.

#![allow(unused_imports)]

pub mod cave;
pub mod major;
pub mod shop;

pub use cave::*;
pub use major::*;
pub use shop::*;
