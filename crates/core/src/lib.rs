//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the tile model, the fog-of-war, and move resolution.
//! It has **no dependencies** on terminal rendering or command parsing, making it:
//!
//! - **Deterministic**: the same map and commands always produce the same game
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: can run behind any front end (terminal, JSON, tests)
//!
//! # Module Structure
//!
//! - [`tile`]: one cell's content and monotonic reveal level
//! - [`board`]: jagged grid of tiles with the playable-cell rule
//! - [`reveal`]: 7x7 reveal pass and the cumulative revealed rectangle
//! - [`game_state`]: robot position, energy, outcome, and move resolution
//! - [`map`]: map file parsing
//! - [`snapshot`]: read-only view handed to renderers
//!
//! # Game Rules
//!
//! - **Movement**: a command is a direction plus a repeat count; each unit step
//!   into a wall or off the board is absorbed without cost
//! - **Energy**: every step costs 1, batteries give 10, traps take 10
//! - **Pickups**: batteries and traps become trail once entered
//! - **Fog**: after each step the 7x7 window around the robot is revealed,
//!   with the outer ring only masked
//! - **Outcome**: checked after each command; standing on the goal wins,
//!   otherwise energy at or below zero loses
//!
//! # Example
//!
//! ```
//! use goal_robot_core::{Board, GameState};
//! use goal_robot_types::{Direction, Outcome};
//!
//! let board = Board::from_rows(["%%%%%", "%   %", "% * %", "%   %", "%%%%%"]);
//! let mut game = GameState::new(board, (1, 1), 5).unwrap();
//!
//! game.apply_move(Direction::Right, 1).unwrap();
//! game.apply_move(Direction::Down, 1).unwrap();
//!
//! assert_eq!(game.player(), (2, 2));
//! assert_eq!(game.energy(), 3);
//! assert_eq!(game.outcome(), Outcome::Won);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod map;
pub mod reveal;
pub mod snapshot;
pub mod tile;

pub use goal_robot_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::{GameError, Result};
pub use game_state::{GameState, MoveReport};
pub use map::{MapError, MapSource};
pub use reveal::{RevealBounds, RevealTracker};
pub use snapshot::{GameSnapshot, ViewCell};
pub use tile::Tile;
