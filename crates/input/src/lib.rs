//! Command input module.
//!
//! Turns raw command lines into [`MoveCommand`]s for the game engine. This
//! crate does no I/O; the session loop owns reading lines and re-prompting.

pub mod command;

pub use goal_robot_types as types;

pub use command::{parse_command, CommandError, MoveCommand};
