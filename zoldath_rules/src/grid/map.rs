//! The static tile map loaded from a text template.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use super::{Direction, Location};
use crate::error::RulesError;

/// Tile code for open ground with nothing on it.
pub const EMPTY_TILE: &str = ".";

/// Immutable 2D matrix of tile glyphs.
///
/// Every non-empty tile seeds one entity when the world is (re)built; the map
/// itself never changes after loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMap {
    tiles: Vec<Vec<String>>,
    width: usize,
}

impl TileMap {
    /// Parse a map template: one row per line, one glyph per tile.
    pub fn parse(text: &str) -> Result<Self, RulesError> {
        let mut tiles: Vec<Vec<String>> = text
            .lines()
            .map(|line| split_glyphs(line.trim_end()))
            .collect();

        while tiles.last().is_some_and(|row| row.is_empty()) {
            tiles.pop();
        }

        let width = match tiles.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(RulesError::EmptyMap),
        };

        if let Some((row, found)) = tiles
            .iter()
            .enumerate()
            .find(|(_, tiles)| tiles.len() != width)
            .map(|(row, tiles)| (row, tiles.len()))
        {
            return Err(RulesError::RaggedRow {
                row,
                expected: width,
                found,
            });
        }

        Ok(Self { tiles, width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.tiles.len()
    }

    /// Check whether a location falls inside the grid.
    pub fn contains(&self, location: Location) -> bool {
        location.row >= 0
            && location.col >= 0
            && (location.row as usize) < self.height()
            && (location.col as usize) < self.width
    }

    /// Glyph at a location, or `None` when out of bounds.
    pub fn tile(&self, location: Location) -> Option<&str> {
        let row = usize::try_from(location.row).ok()?;
        let col = usize::try_from(location.col).ok()?;
        self.tiles.get(row)?.get(col).map(String::as_str)
    }

    /// Wrap a location onto the grid as if its edges were joined (a torus).
    pub fn wrap(&self, location: Location) -> Location {
        Location::new(
            location.row.rem_euclid(self.height() as i32),
            location.col.rem_euclid(self.width as i32),
        )
    }

    /// The in-bounds orthogonal neighbors of a location.
    pub fn neighbors(&self, location: Location) -> Vec<Location> {
        Direction::ALL
            .iter()
            .map(|direction| location.step(*direction))
            .filter(|neighbor| self.contains(*neighbor))
            .collect()
    }

    /// Every location on the grid, row-major.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.cells().map(|(location, _)| location)
    }

    /// Every `(location, glyph)` pair, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Location, &str)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .map(move |(col, tile)| (Location::new(row as i32, col as i32), tile.as_str()))
        })
    }

    /// The raw tile rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.tiles
    }
}

/// Split a line into display glyphs.
///
/// Emoji such as "🗡️" (sword + variation selector), "🧑‍🚒" (a zero-width-joiner
/// sequence) or "🇯🇵" (a regional-indicator pair) span several chars but occupy
/// a single tile.
pub fn split_glyphs(line: &str) -> Vec<String> {
    line.graphemes(true).map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_and_emoji() {
        assert_eq!(split_glyphs("a.b"), vec!["a", ".", "b"]);
        assert_eq!(split_glyphs("🌳.🐝"), vec!["🌳", ".", "🐝"]);
    }

    #[test]
    fn test_split_multi_codepoint_glyphs() {
        assert_eq!(split_glyphs("🗡️🧑‍🚒⚙️"), vec!["🗡️", "🧑‍🚒", "⚙️"]);
        assert_eq!(split_glyphs(".🐿️."), vec![".", "🐿️", "."]);
    }

    #[test]
    fn test_split_flags_and_keycaps() {
        assert_eq!(split_glyphs(".🇯🇵."), vec![".", "🇯🇵", "."]);
        assert_eq!(split_glyphs("🇯🇵🇫🇷"), vec!["🇯🇵", "🇫🇷"]);
        assert_eq!(split_glyphs("1️⃣👋🏽"), vec!["1️⃣", "👋🏽"]);
    }

    #[test]
    fn test_parse_row_with_flag() {
        let map = TileMap::parse(".🇯🇵.\n...").unwrap();
        assert_eq!(map.width(), 3);
        assert_eq!(map.tile(Location::new(0, 1)), Some("🇯🇵"));
    }

    #[test]
    fn test_parse_dimensions() {
        let map = TileMap::parse("🌳🌳🌳\n.🐝.\n").unwrap();
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 2);
        assert_eq!(map.tile(Location::new(1, 1)), Some("🐝"));
        assert_eq!(map.tile(Location::new(1, 0)), Some(EMPTY_TILE));
        assert_eq!(map.tile(Location::new(2, 0)), None);
        assert_eq!(map.tile(Location::new(-1, 0)), None);
    }

    #[test]
    fn test_parse_handles_crlf_and_trailing_blank_lines() {
        let map = TileMap::parse("..\r\n..\r\n\r\n\n").unwrap();
        assert_eq!(map.height(), 2);
        assert_eq!(map.width(), 2);
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(TileMap::parse(""), Err(RulesError::EmptyMap)));
        assert!(matches!(TileMap::parse("\n\n"), Err(RulesError::EmptyMap)));
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let result = TileMap::parse("...\n..\n...");
        assert!(matches!(
            result,
            Err(RulesError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_bounds_and_wrap() {
        let map = TileMap::parse("...\n...").unwrap();
        assert!(map.contains(Location::new(0, 0)));
        assert!(map.contains(Location::new(1, 2)));
        assert!(!map.contains(Location::new(2, 0)));
        assert!(!map.contains(Location::new(0, -1)));

        assert_eq!(map.wrap(Location::new(-1, 0)), Location::new(1, 0));
        assert_eq!(map.wrap(Location::new(0, 3)), Location::new(0, 0));
        assert_eq!(map.wrap(Location::new(2, -1)), Location::new(0, 2));
    }

    #[test]
    fn test_neighbors_stay_in_bounds() {
        let map = TileMap::parse("...\n...\n...").unwrap();
        assert_eq!(map.neighbors(Location::new(1, 1)).len(), 4);
        assert_eq!(map.neighbors(Location::new(0, 0)).len(), 2);
        assert_eq!(map.neighbors(Location::new(0, 1)).len(), 3);
    }

    #[test]
    fn test_cells_are_row_major() {
        let map = TileMap::parse("ab\ncd").unwrap();
        let cells: Vec<_> = map.cells().collect();
        assert_eq!(
            cells,
            vec![
                (Location::new(0, 0), "a"),
                (Location::new(0, 1), "b"),
                (Location::new(1, 0), "c"),
                (Location::new(1, 1), "d"),
            ]
        );
    }
}
