use crate::reveal::RevealBounds;
use crate::tile::Tile;
use crate::types::{
    Outcome, Pos, TileType, HIDDEN_CHAR, LEVEL_HIDDEN, LEVEL_MASKED, MASKED_CHAR, PLAYER_CHAR,
    VOID_CHAR,
};

/// What a renderer should draw for one cell of the revealed rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewCell {
    Player,
    /// Inside the rectangle but not a playable cell.
    Void,
    Hidden,
    Masked,
    Shown(TileType),
}

impl ViewCell {
    pub fn ch(self) -> char {
        match self {
            ViewCell::Player => PLAYER_CHAR,
            ViewCell::Void => VOID_CHAR,
            ViewCell::Hidden => HIDDEN_CHAR,
            ViewCell::Masked => MASKED_CHAR,
            ViewCell::Shown(kind) => kind.ch(),
        }
    }
}

impl From<Tile> for ViewCell {
    fn from(tile: Tile) -> Self {
        match tile.level() {
            LEVEL_HIDDEN => ViewCell::Hidden,
            LEVEL_MASKED => ViewCell::Masked,
            _ => ViewCell::Shown(tile.content()),
        }
    }
}

/// Read-only view of the game, covering the revealed rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub energy: i64,
    pub outcome: Outcome,
    pub player: Pos,
    pub bounds: RevealBounds,
    /// Row-major, `bounds.width()` cells per row
    pub cells: Vec<ViewCell>,
}

impl GameSnapshot {
    pub fn width(&self) -> usize {
        self.bounds.width()
    }

    pub fn height(&self) -> usize {
        self.bounds.height()
    }

    /// Cell at board position `pos`, if it lies inside the rectangle
    pub fn get(&self, pos: Pos) -> Option<ViewCell> {
        if !self.bounds.contains(pos) {
            return None;
        }
        let r = (pos.0 - self.bounds.row_min) as usize;
        let c = (pos.1 - self.bounds.col_min) as usize;
        self.cells.get(r * self.width() + c).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[ViewCell]> {
        self.cells.chunks(self.width().max(1))
    }

    /// Each row of the rectangle as text
    pub fn row_strings(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.ch()).collect())
            .collect()
    }
}
