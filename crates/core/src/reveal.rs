//! Fog-of-war reveal pass and the cumulative revealed rectangle

use std::ops::RangeInclusive;

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Coord, Pos, LEVEL_MASKED, LEVEL_SHOWN, REVEAL_RADIUS, REVEAL_WINDOW_CELLS};

/// Smallest rectangle containing every cell any reveal pass has touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealBounds {
    pub row_min: Coord,
    pub row_max: Coord,
    pub col_min: Coord,
    pub col_max: Coord,
}

impl RevealBounds {
    /// A 1x1 rectangle at `pos`
    pub fn at((row, col): Pos) -> Self {
        Self {
            row_min: row,
            row_max: row,
            col_min: col,
            col_max: col,
        }
    }

    /// Grow to include `pos`
    pub fn include(&mut self, (row, col): Pos) {
        self.row_min = self.row_min.min(row);
        self.row_max = self.row_max.max(row);
        self.col_min = self.col_min.min(col);
        self.col_max = self.col_max.max(col);
    }

    pub fn contains(&self, (row, col): Pos) -> bool {
        self.rows().contains(&row) && self.cols().contains(&col)
    }

    /// True if `other` lies entirely inside `self`
    pub fn covers(&self, other: &RevealBounds) -> bool {
        self.row_min <= other.row_min
            && self.row_max >= other.row_max
            && self.col_min <= other.col_min
            && self.col_max >= other.col_max
    }

    pub fn rows(&self) -> RangeInclusive<Coord> {
        self.row_min..=self.row_max
    }

    pub fn cols(&self) -> RangeInclusive<Coord> {
        self.col_min..=self.col_max
    }

    pub fn height(&self) -> usize {
        (self.row_max - self.row_min + 1) as usize
    }

    pub fn width(&self) -> usize {
        (self.col_max - self.col_min + 1) as usize
    }
}

/// Reveal level for a cell at offset `(dy, dx)` from the robot
///
/// The outer ring is any offset with `|dy| == 3` or `|dx| == 3`, corners included.
pub fn level_for_offset(dy: Coord, dx: Coord) -> u8 {
    if dy.abs() == REVEAL_RADIUS || dx.abs() == REVEAL_RADIUS {
        LEVEL_MASKED
    } else {
        LEVEL_SHOWN
    }
}

/// Cells whose reveal level rose during one pass
pub type RevealedCells = ArrayVec<Pos, REVEAL_WINDOW_CELLS>;

/// Tracks the revealed rectangle and runs reveal passes over a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTracker {
    bounds: RevealBounds,
}

impl RevealTracker {
    /// Seed the rectangle at the robot's starting position
    pub fn new(origin: Pos) -> Self {
        Self {
            bounds: RevealBounds::at(origin),
        }
    }

    pub fn bounds(&self) -> RevealBounds {
        self.bounds
    }

    /// Reveal the 7x7 window around `center`
    ///
    /// Every playable cell in the window grows the rectangle, whether or not its
    /// level changed. Returns the cells whose level actually rose.
    pub fn reveal_around(&mut self, board: &mut Board, center: Pos) -> RevealedCells {
        let mut revealed = RevealedCells::new();
        let (row, col) = center;

        for dy in -REVEAL_RADIUS..=REVEAL_RADIUS {
            for dx in -REVEAL_RADIUS..=REVEAL_RADIUS {
                let pos = (row + dy, col + dx);
                if !board.in_bounds(pos) {
                    continue;
                }
                if let Some(tile) = board.at_mut(pos) {
                    if tile.reveal(level_for_offset(dy, dx)) {
                        revealed.push(pos);
                    }
                }
                self.bounds.include(pos);
            }
        }

        revealed
    }
}
