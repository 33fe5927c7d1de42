//! # Zoldath Engine
//!
//! Runs a session of the Zoldath tile game on top of `zoldath_rules`: it owns
//! the live entity list and the player, and turns each directional command
//! into timer ticks plus one entity interaction.
//!
//! ## Core Components
//!
//! - **registry**: the live entity list, changed only by whole-record operations
//! - **engine**: the movement and interaction engine (`Game`)
//! - **audio**: named looping tracks toggled by audio entities
//! - **config**: TOML-backed session settings
//! - **input** / **snapshot**: the keyboard and rendering edges
//!
//! ## Design Philosophy
//!
//! - **Turn-Based**: time only advances when the player makes an accepted move
//! - **All-or-Nothing**: a command commits every effect or none
//! - **Quiet Failures**: bad commands and missing collaborators are logged, never raised

pub mod audio;
pub mod config;
pub mod engine;
pub mod input;
pub mod registry;
pub mod snapshot;

pub use audio::*;
pub use config::*;
pub use engine::*;
pub use input::*;
pub use registry::*;
pub use snapshot::*;
