//! The hero record, its combat/inventory operations, and persistence.

#![allow(unused_imports)]

pub mod save;
pub mod types;

pub use save::*;
pub use types::*;
