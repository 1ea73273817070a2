//! Session module - the interactive game loop
//!
//! Connects the pieces: loads a map with `core`, reads command lines and
//! parses them with `input`, applies them to the `core::GameState`, and
//! prints each turn through `term`.
//!
//! The loop is synchronous: a command is fully resolved and printed before
//! the next line is read.

pub mod config;
pub mod session;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

pub use goal_robot_core as core;
pub use goal_robot_input as input;
pub use goal_robot_term as term;
pub use goal_robot_types as types;

pub use config::{SessionConfig, DEFAULT_MAP_PATH};
pub use session::{Session, SessionError};

use crate::core::MapSource;
use crate::term::Presenter;
use crate::types::Outcome;

/// Load the configured map and play it over `input`/`output`.
pub fn play<R: BufRead, W: Write>(config: &SessionConfig, input: R, output: W) -> Result<Outcome> {
    let map = MapSource::load(&config.map_path)
        .with_context(|| format!("loading map {}", config.map_path.display()))?;
    let game = map
        .into_game()
        .with_context(|| format!("starting game from {}", config.map_path.display()))?;

    let presenter = Presenter::new(output, config.format, config.styled());
    let mut session = Session::new(game, input, presenter);
    let outcome = session.run()?;
    Ok(outcome)
}
