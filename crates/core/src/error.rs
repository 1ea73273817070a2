use thiserror::Error;

use crate::types::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Start position ({0}, {1}) is outside the playable board")]
    StartOutOfBounds(Coord, Coord),
    #[error("Start position ({0}, {1}) is on a rigid tile")]
    StartBlocked(Coord, Coord),
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
