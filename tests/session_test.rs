//! Session tests - scripted stdin/stdout transcripts

use std::fs;
use std::path::PathBuf;

use goal_robot::core::MapSource;
use goal_robot::session::{play, Session, SessionConfig, SessionError};
use goal_robot::term::{ColorMode, OutputFormat, Presenter};
use goal_robot::types::Outcome;

const GOAL_MAP: &str = "5 1 1\n%%%%%\n%   %\n% * %\n%   %\n%%%%%\n";

fn run_session(
    map: &str,
    input: impl AsRef<[u8]>,
    format: OutputFormat,
) -> (Result<Outcome, SessionError>, String) {
    let game = MapSource::parse(map).unwrap().into_game().unwrap();
    let presenter = Presenter::new(Vec::new(), format, false);
    let mut session = Session::new(game, input.as_ref(), presenter);
    let result = session.run();
    let (_, out) = session.into_parts();
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_win_transcript() {
    let (result, out) = run_session(GOAL_MAP, "1r\n1d\n", OutputFormat::Text);
    assert_eq!(result.unwrap(), Outcome::Won);
    assert_eq!(
        out,
        "5\no  ?\n * ?\n   ?\n????\n\
         4\n o %\n * %\n   %\n????\n\
         3\n   %\n o %\n   %\n%%%%\n\
         Congratulations! You won the game!\n"
    );
}

#[test]
fn test_non_utf8_line_is_invalid_input() {
    let (result, out) = run_session(GOAL_MAP, b"\xff\n1r\n1d\n", OutputFormat::Text);
    assert_eq!(result.unwrap(), Outcome::Won);
    assert_eq!(out.matches("Invalid Input!").count(), 1);
    assert!(out.starts_with("5\no  ?\n * ?\n   ?\n????\nInvalid Input!\n4\n"));
    assert!(out.ends_with("Congratulations! You won the game!\n"));
}

#[test]
fn test_lose_transcript_prints_clamped_energy() {
    let map = "1 1 1\n%%%%%\n% - %\n%%%%%\n";
    let (result, out) = run_session(map, "r\n", OutputFormat::Text);
    assert_eq!(result.unwrap(), Outcome::Lost);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "1");
    assert!(lines.contains(&"0"));
    assert_eq!(lines.last(), Some(&"You are out of energy. You lose!"));
}

#[test]
fn test_invalid_input_is_reprompted_without_state_change() {
    let (result, out) = run_session(GOAL_MAP, "jump\n r\nR\n1r\n1d\n", OutputFormat::Text);
    assert_eq!(result.unwrap(), Outcome::Won);
    assert_eq!(out.matches("Invalid Input!\n").count(), 3);
    // Energy only printed for the opening state and the two accepted commands.
    assert_eq!(out.lines().filter(|l| l.parse::<i64>().is_ok()).count(), 3);
}

#[test]
fn test_input_closed_early() {
    let (result, out) = run_session(GOAL_MAP, "1r\n", OutputFormat::Text);
    assert!(matches!(result, Err(SessionError::InputClosed)));
    assert!(!out.contains("Congratulations"));
}

#[test]
fn test_json_transcript() {
    let (result, out) = run_session(GOAL_MAP, "r\nd\n", OutputFormat::Json);
    assert_eq!(result.unwrap(), Outcome::Won);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    let last: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
    assert_eq!(last["outcome"], "won");
    assert_eq!(last["energy"], 3);
    assert_eq!(last["player"], serde_json::json!([2, 2]));
    assert_eq!(lines[3], "Congratulations! You won the game!");
}

fn temp_map(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("goal-robot-{}-{}.txt", name, std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_play_loads_map_from_disk() {
    let path = temp_map("play", GOAL_MAP);
    let config = SessionConfig {
        map_path: path.clone(),
        color: ColorMode::Never,
        format: OutputFormat::Text,
    };
    let mut out = Vec::new();
    let outcome = play(&config, "r\nd\n".as_bytes(), &mut out).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(outcome, Outcome::Won);
    assert!(String::from_utf8(out).unwrap().ends_with("You won the game!\n"));
}

#[test]
fn test_play_reports_bad_start() {
    let path = temp_map("bad-start", "5 0 0\n%%%\n% %\n%%%\n");
    let config = SessionConfig {
        map_path: path.clone(),
        color: ColorMode::Never,
        format: OutputFormat::Text,
    };
    let err = play(&config, "".as_bytes(), Vec::new()).unwrap_err();
    fs::remove_file(&path).ok();

    let message = format!("{:#}", err);
    assert!(message.contains("outside the playable board"), "{}", message);
}

#[test]
fn test_play_reports_missing_map() {
    let config = SessionConfig {
        map_path: PathBuf::from("/no/such/goal-robot-map.txt"),
        ..SessionConfig::default()
    };
    let err = play(&config, "".as_bytes(), Vec::new()).unwrap_err();
    assert!(format!("{:#}", err).contains("loading map"));
}
