//! Terminal output module.
//!
//! Everything the game prints goes through here:
//!
//! - [`game_view`] maps a `core::GameSnapshot` into a [`FrameBuffer`] (pure)
//! - [`renderer`] writes a framebuffer as text lines, optionally coloured
//! - [`observe`] writes a snapshot as one JSON line
//! - [`presenter`] picks between the two per turn and prints messages
//!
//! Output is line-oriented: the map scrolls together with the typed commands.

pub mod fb;
pub mod game_view;
pub mod observe;
pub mod presenter;
pub mod renderer;

pub use goal_robot_core as core;
pub use goal_robot_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Palette};
pub use observe::{write_observation, Observation};
pub use presenter::{OutputFormat, Presenter};
pub use renderer::{encode_plain_into, encode_styled_into, ColorMode, TextRenderer};
