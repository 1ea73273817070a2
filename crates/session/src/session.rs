//! Session loop: read a command line, apply it, print the result.

use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::{GameError, GameState};
use crate::input::{parse_command, MoveCommand};
use crate::term::Presenter;
use crate::types::{Outcome, INVALID_INPUT_MESSAGE};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Input closed before the game ended")]
    InputClosed,
    #[error("Failed to read command")]
    Read(#[source] std::io::Error),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Output(#[from] anyhow::Error),
}

/// One game played over a line-based command stream.
pub struct Session<R, W: Write> {
    game: GameState,
    input: R,
    presenter: Presenter<W>,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: GameState, input: R, presenter: Presenter<W>) -> Self {
        Self {
            game,
            input,
            presenter,
            line: Vec::new(),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Play until the game is won or lost
    ///
    /// Prints the opening state, then the state after every accepted command,
    /// then the closing message.
    pub fn run(&mut self) -> Result<Outcome, SessionError> {
        info!(
            energy = self.game.energy(),
            start = ?self.game.player(),
            "session started"
        );
        self.presenter.turn(&self.game.snapshot())?;

        while !self.game.is_over() {
            let command = self.next_command()?;
            let report = self.game.apply_move(command.direction, command.count)?;
            debug!(?report, "turn resolved");
            self.presenter.turn(&self.game.snapshot())?;
        }

        let outcome = self.game.outcome();
        if let Some(message) = outcome.message() {
            self.presenter.message(message)?;
        }
        info!(outcome = outcome.as_str(), commands = self.game.commands(), "session ended");
        Ok(outcome)
    }

    /// Read lines until one parses; malformed lines are reported and skipped.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and then rejected
    /// by the parser like any other malformed command.
    fn next_command(&mut self) -> Result<MoveCommand, SessionError> {
        loop {
            self.line.clear();
            let read = self
                .input
                .read_until(b'\n', &mut self.line)
                .map_err(SessionError::Read)?;
            if read == 0 {
                return Err(SessionError::InputClosed);
            }

            let text = String::from_utf8_lossy(&self.line);
            let line = text.trim_end_matches(['\n', '\r']);
            match parse_command(line) {
                Ok(command) => return Ok(command),
                Err(err) => {
                    warn!(%err, line, "rejected command");
                    self.presenter.message(INVALID_INPUT_MESSAGE)?;
                }
            }
        }
    }

    pub fn into_parts(self) -> (GameState, W) {
        (self.game, self.presenter.into_inner())
    }
}
