//! Terminal presentation: the console abstraction and per-scene text blocks.

#![allow(unused_imports)]

pub mod console;
pub mod render;

pub use console::*;
