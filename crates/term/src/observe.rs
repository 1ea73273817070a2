//! JSON observation output.
//!
//! One line of JSON per turn, for scripts and bots driving the game over a
//! pipe. The rows use the same glyphs as the text renderer.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::core::{GameSnapshot, RevealBounds};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundsView {
    pub row_min: i32,
    pub row_max: i32,
    pub col_min: i32,
    pub col_max: i32,
}

impl From<RevealBounds> for BoundsView {
    fn from(b: RevealBounds) -> Self {
        Self {
            row_min: b.row_min,
            row_max: b.row_max,
            col_min: b.col_min,
            col_max: b.col_max,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub energy: i64,
    pub outcome: &'static str,
    /// `[row, col]`
    pub player: [i32; 2],
    pub bounds: BoundsView,
    pub rows: Vec<String>,
}

impl From<&GameSnapshot> for Observation {
    fn from(snap: &GameSnapshot) -> Self {
        Self {
            energy: snap.energy,
            outcome: snap.outcome.as_str(),
            player: [snap.player.0, snap.player.1],
            bounds: snap.bounds.into(),
            rows: snap.row_strings(),
        }
    }
}

/// Write one observation line to `out`.
pub fn write_observation<W: Write>(snap: &GameSnapshot, out: &mut W) -> Result<()> {
    serde_json::to_writer(&mut *out, &Observation::from(snap))?;
    out.write_all(b"\n")?;
    Ok(())
}
