//! Tile module - per-cell content and fog-of-war state

use crate::types::{TileType, HIDDEN_CHAR, LEVEL_HIDDEN, LEVEL_MASKED, MASKED_CHAR};

/// One board cell
///
/// The reveal level only ever goes up: a tile that has been seen stays seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    content: TileType,
    level: u8,
}

impl Tile {
    /// Create a hidden tile with the given content
    pub fn new(content: TileType) -> Self {
        Self {
            content,
            level: LEVEL_HIDDEN,
        }
    }

    /// Create a hidden tile from a map character
    pub fn from_char(ch: char) -> Self {
        Self::new(TileType::classify(ch))
    }

    pub fn content(&self) -> TileType {
        self.content
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Raise the reveal level to at least `level`
    ///
    /// Returns true if the level went up.
    pub fn reveal(&mut self, level: u8) -> bool {
        if level <= self.level {
            return false;
        }
        self.level = level;
        true
    }

    /// Turn the tile into a trail. Idempotent.
    pub fn consume(&mut self) {
        self.content = TileType::Trail;
    }

    /// Character shown for this tile at its current reveal level
    pub fn visible_char(&self) -> char {
        match self.level {
            LEVEL_HIDDEN => HIDDEN_CHAR,
            LEVEL_MASKED => MASKED_CHAR,
            _ => self.content.ch(),
        }
    }
}
