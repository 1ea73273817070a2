//! Map source loader
//!
//! A map file starts with three integers (energy, start row, start column),
//! separated by any whitespace, followed by the character grid:
//!
//! ```text
//! 5 1 1
//! %%%%%
//! %   %
//! % * %
//! %   %
//! %%%%%
//! ```
//!
//! Whatever follows the third integer on its line is ignored. Every later line
//! is a grid row; trailing blank lines are dropped.

use std::fs;
use std::path::{Path, PathBuf};

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::board::Board;
use crate::error::GameError;
use crate::game_state::GameState;
use crate::types::{Coord, Pos};

const HEADER_FIELDS: [&str; 3] = ["energy", "start row", "start column"];

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Failed to read map {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Map header is missing the {0}")]
    MissingHeader(&'static str),
    #[error("Map header {field} is not an integer: {value:?}")]
    BadHeader { field: &'static str, value: String },
    #[error("Map has no grid rows")]
    EmptyGrid,
    #[error(transparent)]
    Game(#[from] GameError),
}

/// A parsed map file, not yet turned into a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapSource {
    pub energy: i64,
    pub start: Pos,
    pub rows: Vec<String>,
}

impl MapSource {
    /// Read and parse a map file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse map text
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut lines = text.lines();

        let mut header: ArrayVec<&str, 3> = ArrayVec::new();
        while !header.is_full() {
            let Some(line) = lines.next() else {
                return Err(MapError::MissingHeader(HEADER_FIELDS[header.len()]));
            };
            // Tokens after the third one share its line and are dropped with it.
            for token in line.split_whitespace().take(header.remaining_capacity()) {
                header.push(token);
            }
        }

        let energy: i64 = parse_field(header[0], HEADER_FIELDS[0])?;
        let row: Coord = parse_field(header[1], HEADER_FIELDS[1])?;
        let col: Coord = parse_field(header[2], HEADER_FIELDS[2])?;

        let mut rows: Vec<String> = lines.map(str::to_owned).collect();
        while rows.last().is_some_and(|line| line.trim().is_empty()) {
            rows.pop();
        }
        if rows.is_empty() {
            return Err(MapError::EmptyGrid);
        }

        Ok(Self {
            energy,
            start: (row, col),
            rows,
        })
    }

    pub fn board(&self) -> Board {
        Board::from_rows(&self.rows)
    }

    /// Build the game this map describes
    pub fn into_game(self) -> Result<GameState, MapError> {
        let board = self.board();
        Ok(GameState::new(board, self.start, self.energy)?)
    }
}

fn parse_field<T: std::str::FromStr>(value: &str, field: &'static str) -> Result<T, MapError> {
    value.parse().map_err(|_| MapError::BadHeader {
        field,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_jagged_rows() {
        let map = MapSource::parse("12 2 3\n%%%%\n%  *  %\n%+\n").unwrap();
        assert_eq!(map.energy, 12);
        assert_eq!(map.start, (2, 3));
        assert_eq!(map.rows, vec!["%%%%", "%  *  %", "%+"]);
        let board = map.board();
        assert_eq!(board.row_width(1), 7);
        assert_eq!(board.row_width(2), 2);
    }

    #[test]
    fn header_may_span_lines_and_ignores_rest_of_line() {
        let map = MapSource::parse("7\n1\n1 trailing words\n%%%\n%*%\n").unwrap();
        assert_eq!(map.energy, 7);
        assert_eq!(map.start, (1, 1));
        assert_eq!(map.rows, vec!["%%%", "%*%"]);
    }

    #[test]
    fn keeps_inner_blank_rows_and_drops_trailing_ones() {
        let map = MapSource::parse("1 1 1\r\n%%%\r\n\r\n% %\r\n  \r\n\r\n").unwrap();
        assert_eq!(map.rows, vec!["%%%", "", "% %"]);
    }

    #[test]
    fn rejects_bad_headers() {
        assert!(matches!(
            MapSource::parse("5 1\n"),
            Err(MapError::MissingHeader("start column"))
        ));
        assert!(matches!(
            MapSource::parse(""),
            Err(MapError::MissingHeader("energy"))
        ));
        assert!(matches!(
            MapSource::parse("five 1 1\n%%%\n"),
            Err(MapError::BadHeader { field: "energy", .. })
        ));
        assert!(matches!(MapSource::parse("5 1 1\n\n  \n"), Err(MapError::EmptyGrid)));
    }

    #[test]
    fn into_game_validates_start() {
        let err = MapSource::parse("5 0 0\n%%%\n% %\n%%%\n")
            .unwrap()
            .into_game()
            .unwrap_err();
        assert!(matches!(err, MapError::Game(GameError::StartOutOfBounds(0, 0))));

        let game = MapSource::parse("5 1 1\n%%%\n% %\n%%%\n")
            .unwrap()
            .into_game()
            .unwrap();
        assert_eq!(game.player(), (1, 1));
        assert_eq!(game.energy(), 5);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = MapSource::load("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, MapError::Io { .. }));
    }
}
