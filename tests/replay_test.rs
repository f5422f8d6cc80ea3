//! End-to-end tests for the replay front end and settings.

use sanmoku::{ReplayReport, Settings, replay};
use sanmoku_core::{GameError, GameEvent, MoveOrder};
use std::io::Write;

fn events(input: &[&str]) -> Vec<GameEvent> {
    input.iter().map(|s| s.parse::<GameEvent>().unwrap()).collect()
}

#[test]
fn test_replay_draw() {
    let settings = Settings::default();
    let cells = ["0", "1", "2", "4", "3", "5", "7", "6", "8"];
    let session = replay(&settings, &events(&cells)).unwrap();
    let report = ReplayReport::new(&session, &settings);

    assert_eq!(report.status, "Draw");
    assert_eq!(report.plies, 9);
    assert!(report.board.iter().all(Option::is_some));
}

#[test]
fn test_replay_branch_from_rewind() {
    let settings = Settings::default();
    let session = replay(
        &settings,
        &events(&["cell:0", "cell:4", "cell:1", "cell:3", "jump:1", "cell:8"]),
    )
    .unwrap();
    let report = ReplayReport::new(&session, &settings);

    assert_eq!(report.plies, 2);
    assert_eq!(report.view_index, 2);
    assert_eq!(report.board[8], Some('○'));
    assert_eq!(report.board[1], None);
}

#[test]
fn test_replay_toggle_event() {
    let settings = Settings::default();
    let session = replay(&settings, &events(&["4", "toggle"])).unwrap();
    assert_eq!(session.order(), &MoveOrder::Descending);

    let text = ReplayReport::new(&session, &settings).to_text();
    let game_start = text.find("go to game start").unwrap();
    let first_move = text.find("go to move #1").unwrap();
    assert!(first_move < game_start);
    assert!(text.ends_with("[Sort ascending]\n"));
}

#[test]
fn test_replay_rejects_unknown_ply() {
    assert_eq!(
        replay(&Settings::default(), &events(&["jump:3"])),
        Err(GameError::IndexOutOfRange { index: 3, len: 1 })
    );
}

#[test]
fn test_settings_file_drives_replay() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "move_order = \"descending\"\nshow_coordinates = false").unwrap();
    let settings = Settings::load_or_default(file.path()).unwrap();

    let session = replay(&settings, &events(&["4"])).unwrap();
    let report = ReplayReport::new(&session, &settings);
    let labels: Vec<_> = report.moves.iter().map(|e| e.label().clone()).collect();
    assert_eq!(labels, vec!["go to move #1", "go to game start"]);
}
