//! Session configuration.
//!
//! The binary fills this in from command-line flags and environment
//! variables:
//!
//! - `GOAL_ROBOT_MAP`: map file path (default: "game.txt")
//! - `GOAL_ROBOT_COLOR`: `auto`, `always` or `never` (default: auto)
//! - `GOAL_ROBOT_FORMAT`: `text` or `json` (default: text)

use std::path::PathBuf;

use crate::term::{ColorMode, OutputFormat};

/// Map file used when none is given.
pub const DEFAULT_MAP_PATH: &str = "game.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub map_path: PathBuf,
    pub color: ColorMode,
    pub format: OutputFormat,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from(DEFAULT_MAP_PATH),
            color: ColorMode::Auto,
            format: OutputFormat::Text,
        }
    }
}

impl SessionConfig {
    /// Colour only makes sense for the text format.
    pub fn styled(&self) -> bool {
        self.format == OutputFormat::Text && self.color.styled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.map_path, PathBuf::from("game.txt"));
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn json_is_never_styled() {
        let config = SessionConfig {
            color: ColorMode::Always,
            format: OutputFormat::Json,
            ..SessionConfig::default()
        };
        assert!(!config.styled());
    }
}
