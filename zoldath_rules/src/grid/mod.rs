//! Grid geometry: locations, directions and the static tile map.

mod map;

pub use map::*;

use serde::{Deserialize, Serialize};

/// A cell on the grid, addressed by row then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Location {
    pub row: i32,
    pub col: i32,
}

impl Location {
    /// Create a location from a row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell one step away in the given direction.
    pub fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.offset();
        Self::new(self.row + d_row, self.col + d_col)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four unit moves a player can make. There are no diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order neighbors are visited.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Row/column delta for one step.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Map a keyboard `code` (as reported by browsers) to a direction.
    ///
    /// WASD and the arrow keys are bound; everything else is ignored.
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" | "ArrowUp" => Some(Direction::Up),
            "KeyA" | "ArrowLeft" => Some(Direction::Left),
            "KeyS" | "ArrowDown" => Some(Direction::Down),
            "KeyD" | "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step() {
        let origin = Location::new(1, 1);
        assert_eq!(origin.step(Direction::Up), Location::new(0, 1));
        assert_eq!(origin.step(Direction::Down), Location::new(2, 1));
        assert_eq!(origin.step(Direction::Left), Location::new(1, 0));
        assert_eq!(origin.step(Direction::Right), Location::new(1, 2));
    }

    #[test]
    fn test_key_codes() {
        assert_eq!(Direction::from_key_code("KeyW"), Some(Direction::Up));
        assert_eq!(Direction::from_key_code("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key_code("KeyA"), Some(Direction::Left));
        assert_eq!(Direction::from_key_code("ArrowDown"), Some(Direction::Down));
        assert_eq!(Direction::from_key_code("KeyD"), Some(Direction::Right));
        assert_eq!(Direction::from_key_code("KeyQ"), None);
        assert_eq!(Direction::from_key_code("Space"), None);
    }
}
