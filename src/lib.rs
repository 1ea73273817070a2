//! Goal-seeking robot (workspace facade crate).
//!
//! This package exposes `goal_robot::{core,input,session,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use goal_robot_core as core;
pub use goal_robot_input as input;
pub use goal_robot_session as session;
pub use goal_robot_term as term;
pub use goal_robot_types as types;
