//! # Zoldath Rules
//!
//! The static half of the game: the tile map, the entity data model with its
//! behavior catalog, and the player inventory. This crate owns no live game
//! state; the engine crate drives everything defined here.

pub mod entities;
pub mod error;
pub mod grid;
pub mod inventory;

pub use entities::*;
pub use error::*;
pub use grid::*;
pub use inventory::*;
