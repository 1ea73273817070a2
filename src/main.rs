//! Goal-seeking robot runner (default binary).
//!
//! Loads a map, then reads move commands (`3r`, `u`, `12d`, ...) from stdin
//! until the robot reaches the goal or runs out of energy.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use goal_robot::session::{play, SessionConfig, DEFAULT_MAP_PATH};
use goal_robot::term::{ColorMode, OutputFormat};
use goal_robot::types::Outcome;

#[derive(Debug, Parser)]
#[command(version, about = "Guide a robot to the goal through the fog")]
struct Args {
    /// Map file: energy, start row, start column, then the tile grid
    #[arg(env = "GOAL_ROBOT_MAP", default_value = DEFAULT_MAP_PATH)]
    map: PathBuf,

    /// Colour the map: auto, always or never
    #[arg(long, env = "GOAL_ROBOT_COLOR", default_value = "auto", value_parser = parse_color)]
    color: ColorMode,

    /// Output format for each turn: text or json
    #[arg(long, env = "GOAL_ROBOT_FORMAT", default_value = "text", value_parser = parse_format)]
    format: OutputFormat,
}

impl From<Args> for SessionConfig {
    fn from(args: Args) -> Self {
        Self {
            map_path: args.map,
            color: args.color,
            format: args.format,
        }
    }
}

fn parse_color(s: &str) -> Result<ColorMode, String> {
    ColorMode::from_str(s).ok_or_else(|| format!("invalid color mode: {s} (auto, always, never)"))
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(s).ok_or_else(|| format!("invalid format: {s} (text, json)"))
}

fn init_logging() {
    let mut filter = EnvFilter::from_default_env();
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() {
        if let Ok(d) = "goal_robot=warn".parse() {
            filter = filter.add_directive(d);
        }
    }

    fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn main() -> ExitCode {
    init_logging();
    let config = SessionConfig::from(Args::parse());

    match run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &SessionConfig) -> Result<Outcome> {
    let stdin = io::stdin();
    play(config, stdin.lock(), io::stdout().lock())
}
