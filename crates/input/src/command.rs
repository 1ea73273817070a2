//! Move command parsing.
//!
//! Grammar: an optional decimal repeat count followed by one direction letter
//! (`u`, `d`, `l`, `r`), anchored at the start of the line. Anything after the
//! direction letter is ignored.

use thiserror::Error;

use crate::types::Direction;

/// A parsed move command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCommand {
    pub direction: Direction,
    pub count: u32,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("expected an optional count followed by u, d, l or r")]
    MissingDirection,
    #[error("repeat count {0} is too large")]
    CountOverflow(String),
}

/// Parse one command line
pub fn parse_command(line: &str) -> Result<MoveCommand, CommandError> {
    let digits_end = line
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(line.len());
    let (digits, rest) = line.split_at(digits_end);

    let direction = rest
        .chars()
        .next()
        .and_then(Direction::from_char)
        .ok_or(CommandError::MissingDirection)?;

    let count = if digits.is_empty() {
        1
    } else {
        digits
            .parse::<u32>()
            .map_err(|_| CommandError::CountOverflow(digits.to_owned()))?
    };

    Ok(MoveCommand { direction, count })
}
