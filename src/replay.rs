//! Non-interactive replay: feed events through a session and report the result.

use sanmoku_core::{GameError, GameEvent, MoveListEntry, MoveOrder, Outcome, Session};
use serde::Serialize;
use tracing::{info, instrument};

use crate::config::Settings;

/// Snapshot of a session after a replay, as printed by `sanmoku replay`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Viewed board, one glyph per cell (`None` when empty).
    pub board: Vec<Option<char>>,
    /// Outcome of the viewed board.
    pub outcome: Outcome,
    /// Status line for the viewed ply.
    pub status: String,
    /// Viewed ply.
    pub view_index: usize,
    /// Plies on the active timeline.
    pub plies: usize,
    /// Order of `moves`.
    pub order: MoveOrder,
    /// Move list in the session's order.
    pub moves: Vec<MoveListEntry>,
    /// Viewed board as a text grid.
    #[serde(skip)]
    grid: String,
}

impl ReplayReport {
    /// Builds a report from a session.
    #[instrument(skip(session, settings))]
    pub fn new(session: &Session, settings: &Settings) -> Self {
        let state = session.state();
        Self {
            board: state
                .current_board()
                .squares()
                .iter()
                .map(|s| s.mark().map(|m| m.glyph()))
                .collect(),
            outcome: state.outcome(),
            status: state.status().to_string(),
            view_index: state.view_index(),
            plies: state.plies(),
            order: *session.order(),
            moves: session.move_list(settings.label_style()),
            grid: state.current_board().display(),
        }
    }

    /// Renders the report as plain text.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n\n", self.grid);
        out.push_str(&self.status);
        out.push('\n');
        if let Some(line) = self.outcome.line() {
            out.push_str(&format!("Winning line: {}\n", line));
        }
        out.push('\n');
        for entry in &self.moves {
            let marker = if *entry.is_current() { ">" } else { " " };
            out.push_str(&format!("{} {}\n", marker, entry.label()));
        }
        out.push_str(&format!("[{}]\n", self.order.toggle_label()));
        out
    }
}

/// Runs `events` through a fresh session configured by `settings`.
///
/// # Errors
///
/// Returns [`GameError::IndexOutOfRange`] if an event jumps past the history.
#[instrument(skip(settings))]
pub fn replay(settings: &Settings, events: &[GameEvent]) -> Result<Session, GameError> {
    let session = Session::with_order(*settings.move_order()).reduce_all(events.iter().copied())?;
    info!(
        plies = session.state().plies(),
        view_index = session.state().view_index(),
        "Replay finished"
    );
    Ok(session)
}
