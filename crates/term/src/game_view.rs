//! GameView: maps a `core::GameSnapshot` into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//! The framebuffer covers exactly the revealed rectangle, one cell per tile.

use anyhow::{anyhow, Result};

use crate::core::{GameSnapshot, ViewCell};
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::TileType;

/// Styles used for each kind of cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub player: CellStyle,
    pub goal: CellStyle,
    pub battery: CellStyle,
    pub trap: CellStyle,
    pub wall: CellStyle,
    pub trail: CellStyle,
    pub floor: CellStyle,
    pub masked: CellStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            player: CellStyle::fg(0, 240, 240).bold(),
            goal: CellStyle::fg(240, 200, 0).bold(),
            battery: CellStyle::fg(0, 220, 80),
            trap: CellStyle::fg(240, 60, 60),
            wall: CellStyle::fg(140, 140, 150),
            trail: CellStyle::fg(120, 120, 120).dim(),
            floor: CellStyle::default(),
            masked: CellStyle::fg(100, 100, 110).dim(),
        }
    }
}

impl Palette {
    pub fn style_for(&self, cell: ViewCell) -> CellStyle {
        match cell {
            ViewCell::Player => self.player,
            ViewCell::Void | ViewCell::Hidden => self.floor,
            ViewCell::Masked => self.masked,
            ViewCell::Shown(kind) => match kind {
                TileType::Goal => self.goal,
                TileType::Battery => self.battery,
                TileType::Trap => self.trap,
                TileType::Obstacle | TileType::Boundary => self.wall,
                TileType::Trail => self.trail,
                TileType::Empty
                | TileType::ArrowUp
                | TileType::ArrowDown
                | TileType::ArrowLeft
                | TileType::ArrowRight => self.floor,
            },
        }
    }
}

/// Renders the revealed region of the map.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    palette: Palette,
}

impl GameView {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across turns; it is resized to the
    /// revealed rectangle, which only ever grows. Fails if the rectangle no
    /// longer fits a framebuffer (65535 cells per side).
    pub fn render_into(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) -> Result<()> {
        let width = frame_extent("width", snap.width())?;
        let height = frame_extent("height", snap.height())?;
        fb.resize(width, height);
        fb.clear(self.palette.floor.into_cell(' '));

        for (y, row) in snap.rows().take(height as usize).enumerate() {
            for (x, &cell) in row.iter().take(width as usize).enumerate() {
                fb.put_char(x as u16, y as u16, cell.ch(), self.palette.style_for(cell));
            }
        }
        Ok(())
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot) -> Result<FrameBuffer> {
        let mut fb = FrameBuffer::new(0, 0);
        self.render_into(snap, &mut fb)?;
        Ok(fb)
    }
}

fn frame_extent(axis: &str, n: usize) -> Result<u16> {
    u16::try_from(n).map_err(|_| anyhow!("revealed map {axis} {n} is too large to render"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, GameSnapshot, GameState, RevealBounds};
    use crate::types::Outcome;

    fn game() -> GameState {
        let board = Board::from_rows(["%%%%%%", "% +  %", "%  - %", "% #*.%", "%%%%%%"]);
        GameState::new(board, (1, 1), 5).unwrap()
    }

    #[test]
    fn frame_matches_revealed_rectangle() {
        let snap = game().snapshot();
        let fb = GameView::default().render(&snap).unwrap();
        assert_eq!(fb.width() as usize, snap.width());
        assert_eq!(fb.height() as usize, snap.height());
        for (y, text) in snap.row_strings().iter().enumerate() {
            assert_eq!(&fb.row_text(y as u16), text);
        }
    }

    #[test]
    fn player_and_tiles_get_their_styles() {
        let palette = Palette::default();
        let fb = GameView::new(palette).render(&game().snapshot()).unwrap();
        // Bounds start at (1,1), so the player is at the frame origin.
        let player = fb.get(0, 0).unwrap();
        assert_eq!(player.ch, 'o');
        assert_eq!(player.style, palette.player);
        let battery = fb.get(1, 0).unwrap();
        assert_eq!(battery.ch, '+');
        assert_eq!(battery.style, palette.battery);
        let trap = fb.get(2, 1).unwrap();
        assert_eq!(trap.ch, '-');
        assert_eq!(trap.style, palette.trap);
    }

    #[test]
    fn masked_ring_uses_masked_style() {
        let palette = Palette::default();
        let snap = game().snapshot();
        let fb = GameView::new(palette).render(&snap).unwrap();
        // (4,4) is dy=3 from the player: masked.
        let cell = fb.get(3, 3).unwrap();
        assert_eq!(cell.ch, '?');
        assert_eq!(cell.style, palette.masked);
    }

    #[test]
    fn oversized_rectangle_is_an_error() {
        let width = usize::from(u16::MAX) + 1;
        let snap = GameSnapshot {
            energy: 1,
            outcome: Outcome::InProgress,
            player: (1, 1),
            bounds: RevealBounds {
                row_min: 1,
                row_max: 1,
                col_min: 1,
                col_max: width as i32,
            },
            cells: vec![ViewCell::Hidden; width],
        };
        let err = GameView::default().render(&snap).unwrap_err();
        assert!(err.to_string().contains("width 65536"), "{err}");
    }
}
