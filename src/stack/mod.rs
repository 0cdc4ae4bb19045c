//! Cake persistence
//!
//! - `Cake`: one stack of layers backed by a text file, top line first
//! - `Bakery`: the directory of named cakes

pub mod bakery;
pub mod cake;

pub use bakery::{Bakery, RemoveOutcome};
pub use cake::Cake;
