//! Board module - owns every tile of the map
//!
//! Rows may have different widths; nothing is padded. Tiles live in one flat
//! arena in row-major order, with `row_starts[r]..row_starts[r + 1]` covering row `r`.
//! Coordinates: (row, col), row 0 at the top, col 0 at the left.
//!
//! Row 0 and column 0 are stored but never playable: [`Board::in_bounds`]
//! treats them as margins. This looks like an off-by-one inherited from the
//! map format's first users; it is kept so existing maps play the same.

use crate::tile::Tile;
use crate::types::{Coord, Pos};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat tile arena, row-major
    tiles: Vec<Tile>,
    /// Offset of each row's first tile, plus a final entry equal to `tiles.len()`
    row_starts: Vec<usize>,
}

impl Board {
    /// Build a board from map rows, one character per tile
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tiles = Vec::new();
        let mut row_starts = vec![0];
        for row in rows {
            tiles.extend(row.as_ref().chars().map(Tile::from_char));
            row_starts.push(tiles.len());
        }
        Self { tiles, row_starts }
    }

    /// Number of rows, including the margin row 0
    pub fn row_count(&self) -> usize {
        self.row_starts.len() - 1
    }

    /// Width of `row`; 0 for rows that do not exist
    pub fn row_width(&self, row: Coord) -> usize {
        match usize::try_from(row) {
            Ok(r) if r < self.row_count() => self.row_starts[r + 1] - self.row_starts[r],
            _ => 0,
        }
    }

    /// Check whether `(row, col)` is a playable cell
    ///
    /// Requires `0 < row < row_count` and `0 < col < row_width(row)`.
    pub fn in_bounds(&self, (row, col): Pos) -> bool {
        row > 0
            && (row as usize) < self.row_count()
            && col > 0
            && (col as usize) < self.row_width(row)
    }

    /// Calculate arena index from storage coordinates
    ///
    /// This checks storage bounds only, so margin cells are addressable.
    #[inline(always)]
    fn index(&self, (row, col): Pos) -> Option<usize> {
        let r = usize::try_from(row).ok()?;
        let c = usize::try_from(col).ok()?;
        if r >= self.row_count() {
            return None;
        }
        let start = self.row_starts[r];
        (c < self.row_starts[r + 1] - start).then_some(start + c)
    }

    /// Get the tile stored at `pos`
    pub fn at(&self, pos: Pos) -> Option<&Tile> {
        self.index(pos).map(|idx| &self.tiles[idx])
    }

    /// Get the tile stored at `pos` for mutation
    pub fn at_mut(&mut self, pos: Pos) -> Option<&mut Tile> {
        self.index(pos).map(|idx| &mut self.tiles[idx])
    }

    /// Iterate the tiles of one row
    pub fn row(&self, row: usize) -> &[Tile] {
        if row >= self.row_count() {
            return &[];
        }
        &self.tiles[self.row_starts[row]..self.row_starts[row + 1]]
    }

    /// Get a reference to the tile arena
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}
