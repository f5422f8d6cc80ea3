//! Rendering tests for the terminal UI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use sanmoku::{App, AppAction, Settings, draw};
use sanmoku_core::MoveOrder;

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(app: &mut App, code: KeyCode) -> AppAction {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
        .unwrap()
}

#[test]
fn test_initial_screen() {
    let app = App::new(Settings::default());
    let screen = render(&app);

    assert!(screen.contains("Sanmoku - Tic Tac Toe"));
    assert!(screen.contains("Next player: × (move #1)"));
    assert!(screen.contains("go to game start"));
    assert!(screen.contains("Moves [s: Sort descending]"));
}

#[test]
fn test_moves_appear_with_coordinates() {
    let mut app = App::new(Settings::default());
    press(&mut app, KeyCode::Char('5'));
    press(&mut app, KeyCode::Char('1'));
    let screen = render(&app);

    assert!(screen.contains("go to move #1  (2,2)"));
    assert!(screen.contains("go to move #2  (1,1)"));
    assert!(screen.contains("Next player: × (move #3)"));
}

#[test]
fn test_win_is_reported() {
    let mut app = App::new(Settings::default());
    for c in ['1', '2', '5', '3', '9'] {
        press(&mut app, KeyCode::Char(c));
    }
    assert!(render(&app).contains("Winner: ×"));
}

#[test]
fn test_sort_caption_follows_order() {
    let settings = Settings::default().with_move_order(MoveOrder::Descending);
    let mut app = App::new(settings);
    assert!(render(&app).contains("Moves [s: Sort ascending]"));

    press(&mut app, KeyCode::Char('s'));
    assert!(render(&app).contains("Moves [s: Sort descending]"));
}

#[test]
fn test_plain_labels_when_coordinates_hidden() {
    let settings = Settings::default().with_show_coordinates(false);
    let mut app = App::new(settings);
    press(&mut app, KeyCode::Char('5'));
    let screen = render(&app);

    assert!(screen.contains("go to move #1"));
    assert!(!screen.contains("(2,2)"));
}

#[test]
fn test_jump_back_updates_status() {
    let mut app = App::new(Settings::default());
    for c in ['5', '1', '9'] {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Home);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.session().state().view_index(), 0);
    assert!(render(&app).contains("Next player: × (move #1)"));
}
