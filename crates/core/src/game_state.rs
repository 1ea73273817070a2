//! Game state module - manages the complete game state
//!
//! This module ties together the board, the reveal tracker, the robot's
//! position and energy, and the outcome. It resolves move commands and decides
//! when the game is won or lost.

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::error::{GameError, Result};
use crate::reveal::{RevealBounds, RevealTracker};
use crate::snapshot::{GameSnapshot, ViewCell};
use crate::types::{Direction, Outcome, Pos, TileType};

/// Result of a single unit step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepResult {
    /// The robot moved; `consumed` is true if the tile turned into a trail.
    Moved { consumed: bool, revealed: usize },
    /// Destination is outside the playable board.
    OutOfBounds,
    /// Destination tile is rigid.
    Blocked(TileType),
}

/// Summary of one resolved move command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub direction: Direction,
    pub requested: u32,
    pub steps_taken: u32,
    /// Repetitions absorbed by a wall or the board edge.
    pub steps_blocked: u32,
    pub energy_before: i64,
    pub energy_after: i64,
    /// Number of batteries and traps used up by this command.
    pub consumed: u32,
    /// Cells whose reveal level rose during this command.
    pub newly_revealed: u32,
    pub outcome: Outcome,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    reveal: RevealTracker,
    player: Pos,
    energy: i64,
    outcome: Outcome,
    /// Number of commands resolved so far.
    commands: u32,
}

impl GameState {
    /// Create a game on `board` with the robot at `start`
    ///
    /// The start cell must be playable and not rigid. The initial reveal pass
    /// runs immediately.
    pub fn new(mut board: Board, start: Pos, energy: i64) -> Result<Self> {
        let (row, col) = start;
        if !board.in_bounds(start) {
            return Err(GameError::StartOutOfBounds(row, col));
        }
        if board.at(start).is_some_and(|tile| tile.content().rigid()) {
            return Err(GameError::StartBlocked(row, col));
        }

        let mut reveal = RevealTracker::new(start);
        reveal.reveal_around(&mut board, start);

        Ok(Self {
            board,
            reveal,
            player: start,
            energy,
            outcome: Outcome::InProgress,
            commands: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn energy(&self) -> i64 {
        self.energy
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn bounds(&self) -> RevealBounds {
        self.reveal.bounds()
    }

    pub fn commands(&self) -> u32 {
        self.commands
    }

    /// Resolve a move command: `count` unit steps in `direction`
    ///
    /// Steps into walls or off the board are absorbed. The outcome is evaluated
    /// once, after the whole command. A finished game rejects further moves.
    pub fn apply_move(&mut self, direction: Direction, count: u32) -> Result<MoveReport> {
        if self.is_over() {
            return Err(GameError::AlreadyEnded);
        }

        let energy_before = self.energy;
        let mut steps_taken = 0;
        let mut consumed = 0;
        let mut newly_revealed = 0;

        for _ in 0..count {
            match self.step(direction) {
                StepResult::Moved {
                    consumed: used,
                    revealed,
                } => {
                    steps_taken += 1;
                    consumed += u32::from(used);
                    newly_revealed += revealed as u32;
                }
                blocked => {
                    // Nothing changed, so every remaining repetition would hit the same wall.
                    trace!(?direction, ?blocked, pos = ?self.player, "step absorbed");
                    break;
                }
            }
        }

        self.commands += 1;
        self.update_outcome();

        let report = MoveReport {
            direction,
            requested: count,
            steps_taken,
            steps_blocked: count - steps_taken,
            energy_before,
            energy_after: self.energy,
            consumed,
            newly_revealed,
            outcome: self.outcome,
        };
        debug!(
            ?direction,
            count,
            steps_taken,
            energy = self.energy,
            pos = ?self.player,
            "move applied"
        );
        Ok(report)
    }

    /// Attempt one unit step
    ///
    /// Only reachable through `apply_move`, which rejects finished games and
    /// evaluates the outcome afterwards.
    fn step(&mut self, direction: Direction) -> StepResult {
        let (dr, dc) = direction.offset();
        let dest = (self.player.0 + dr, self.player.1 + dc);
        if !self.board.in_bounds(dest) {
            return StepResult::OutOfBounds;
        }
        let Some(tile) = self.board.at_mut(dest) else {
            return StepResult::OutOfBounds;
        };

        let content = tile.content();
        if content.rigid() {
            return StepResult::Blocked(content);
        }

        self.energy = self.energy.saturating_add(content.energy_delta());
        if content.consumable() {
            tile.consume();
        }
        self.player = dest;
        let revealed = self.reveal.reveal_around(&mut self.board, dest).len();

        StepResult::Moved {
            consumed: content.consumable(),
            revealed,
        }
    }

    /// Latch Won or Lost if the current position calls for it
    ///
    /// The goal check comes first, so reaching the goal wins even with no energy left.
    fn update_outcome(&mut self) {
        if self.is_over() {
            return;
        }
        let here = self.board.at(self.player).map(|tile| tile.content());
        if here == Some(TileType::Goal) {
            self.outcome = Outcome::Won;
        } else if self.energy <= 0 {
            self.energy = 0;
            self.outcome = Outcome::Lost;
        }
        if self.is_over() {
            info!(
                outcome = self.outcome.as_str(),
                energy = self.energy,
                commands = self.commands,
                "game over"
            );
        }
    }

    /// Capture the revealed region for rendering
    pub fn snapshot(&self) -> GameSnapshot {
        let bounds = self.bounds();
        let mut cells = Vec::with_capacity(bounds.width() * bounds.height());
        for row in bounds.rows() {
            for col in bounds.cols() {
                let pos = (row, col);
                let cell = if pos == self.player {
                    ViewCell::Player
                } else if !self.board.in_bounds(pos) {
                    ViewCell::Void
                } else {
                    self.board
                        .at(pos)
                        .map(|tile| ViewCell::from(*tile))
                        .unwrap_or(ViewCell::Void)
                };
                cells.push(cell);
            }
        }

        GameSnapshot {
            energy: self.energy,
            outcome: self.outcome,
            player: self.player,
            bounds,
            cells,
        }
    }
}
