//! Stateless UI rendering for the board and the move list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use sanmoku_core::{Board, Line as WinLine, Mark, MoveListEntry, Position, Square};

use super::app::{App, Focus};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board and moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Sanmoku - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let state = app.session().state();
    draw_board(
        frame,
        main[0],
        state.current_board(),
        app.cursor(),
        state.winning_line(),
        app.focus() == Focus::Board,
    );
    draw_moves(frame, main[1], app);

    let status = Paragraph::new(state.status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(
        "1-9/Enter: play  Tab: switch pane  ↑↓←→: move  s: sort  r: restart  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    winning: Option<WinLine>,
    focused: bool,
) {
    let block = Block::default()
        .title("Board")
        .borders(Borders::ALL)
        .border_style(pane_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 23, 5);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 5])
        .split(board_area);

    for (row, chunk) in (0..3).zip(rows.iter().step_by(2)) {
        draw_row(frame, *chunk, board, row, cursor, winning, focused);
    }
    for chunk in rows.iter().skip(1).step_by(2) {
        let sep = Paragraph::new("───────┼───────┼───────")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, *chunk);
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    row: usize,
    cursor: Position,
    winning: Option<WinLine>,
    focused: bool,
) {
    let mut spans = Vec::with_capacity(5);
    for col in 0..3 {
        if col > 0 {
            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        }
        if let Some(pos) = Position::from_row_col(row, col) {
            spans.push(cell_span(board, pos, cursor, winning, focused));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn cell_span(
    board: &Board,
    pos: Position,
    cursor: Position,
    winning: Option<WinLine>,
    focused: bool,
) -> Span<'static> {
    let (text, base_style) = match board.get(pos) {
        Square::Empty => (
            format!("   {}   ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(mark) => (
            format!("   {}   ", mark.glyph()),
            Style::default()
                .fg(mark_color(mark))
                .add_modifier(Modifier::BOLD),
        ),
    };

    let style = if winning.is_some_and(|line| line.contains(pos)) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if focused && pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };
    Span::styled(text, style)
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let entries = app.move_list();
    let focused = app.focus() == Focus::History;

    let items: Vec<ListItem> = entries.iter().map(move_item).collect();
    let title = format!("Moves [s: {}]", app.session().order().toggle_label());
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(pane_style(focused)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("» ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.history_cursor()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn move_item(entry: &MoveListEntry) -> ListItem<'static> {
    if *entry.is_current() {
        ListItem::new(Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Yellow)),
            Span::styled(
                entry.label().clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]))
    } else {
        ListItem::new(Line::from(format!("  {}", entry.label())))
    }
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    }
}

fn pane_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
