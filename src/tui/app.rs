//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent};
use sanmoku_core::{GameError, GameEvent, MoveListEntry, Position, Session};
use tracing::{debug, info, instrument};

use super::input::{digit_cell, move_cursor};
use crate::config::Settings;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    /// Toggles between the board and the move list.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
///
/// Holds the single [`Session`] and replaces it wholesale on every event.
#[derive(Debug)]
pub struct App {
    session: Session,
    settings: Settings,
    cursor: Position,
    focus: Focus,
    /// Row selected in the displayed move list.
    history_cursor: usize,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(settings))]
    pub fn new(settings: Settings) -> Self {
        Self {
            session: Session::with_order(*settings.move_order()),
            settings,
            cursor: Position::Center,
            focus: Focus::Board,
            history_cursor: 0,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the selected row of the displayed move list.
    pub fn history_cursor(&self) -> usize {
        self.history_cursor
    }

    /// Move list as displayed.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        self.session.move_list(self.settings.label_style())
    }

    /// Handles a key press.
    ///
    /// # Errors
    ///
    /// Propagates [`GameError::IndexOutOfRange`] from the reducer. The move
    /// list only offers existing plies, so this is a bug rather than input.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<AppAction, GameError> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                return Ok(AppAction::Quit);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Char('s') | KeyCode::Char('S') => {
                let last = self.session.state().history().len() - 1;
                self.dispatch(GameEvent::ToggleOrder)?;
                // Keep the same ply selected after the list flips.
                self.history_cursor = last - self.history_cursor;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                debug!(focus = ?self.focus, "Focus changed");
            }
            code if digit_cell(code).is_some() => {
                if let Some(cell) = digit_cell(code) {
                    self.dispatch(GameEvent::CellSelected(cell))?;
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code)?,
                Focus::History => self.handle_history_key(code)?,
            },
        }
        Ok(AppAction::Continue)
    }

    fn handle_board_key(&mut self, code: KeyCode) -> Result<(), GameError> {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dispatch(GameEvent::CellSelected(self.cursor.to_index()))
            }
            code => {
                self.cursor = move_cursor(self.cursor, code);
                Ok(())
            }
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) -> Result<(), GameError> {
        let last = self.session.state().history().len() - 1;
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.history_cursor = self.history_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.history_cursor = (self.history_cursor + 1).min(last);
            }
            KeyCode::Home => self.history_cursor = 0,
            KeyCode::End => self.history_cursor = last,
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(entry) = self.move_list().get(self.history_cursor) {
                    return self.dispatch(entry.on_select());
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Reduces one event into the session.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: GameEvent) -> Result<(), GameError> {
        self.session = self.session.reduce(event)?;
        let last = self.session.state().history().len() - 1;
        self.history_cursor = self.history_cursor.min(last);
        debug!(status = %self.session.state().status(), "Event applied");
        Ok(())
    }

    /// Starts a new game, keeping the move-list order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.session = Session::with_order(*self.session.order());
        self.history_cursor = 0;
    }
}
