//! Keyboard input: turn raw key-down events into moves.

use serde::{Deserialize, Serialize};
use zoldath_rules::Direction;

use crate::engine::{Game, MoveOutcome};

/// A key-down event as reported by the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Physical key code, e.g. `"KeyW"` or `"ArrowLeft"`.
    pub code: String,
    /// Set for auto-repeat events while a key is held down.
    #[serde(default)]
    pub repeat: bool,
}

impl KeyEvent {
    pub fn press(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            repeat: false,
        }
    }

    pub fn held(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            repeat: true,
        }
    }

    /// Direction for a fresh press of a bound key. Repeats move nothing.
    pub fn direction(&self) -> Option<Direction> {
        if self.repeat {
            return None;
        }
        Direction::from_key_code(&self.code)
    }
}

impl Game {
    /// Feed one key event to the game. Returns `None` if the key did nothing.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<MoveOutcome> {
        let direction = event.direction()?;
        Some(self.try_move(direction))
    }
}
