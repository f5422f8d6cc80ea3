//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board). Rules are separated
//! from board storage and from the timeline so they hold for any board,
//! including ones legal play never reaches.

pub mod draw;
pub mod win;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::types::{Board, Mark};

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one square is empty.
    InProgress,
    /// A mark completed a line.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: Line,
    },
    /// Every square is filled and no line is complete.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true once the board accepts no more moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { mark, line } => write!(f, "{} wins on {}", mark, line),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates a board: the first complete line in scan order wins, a full
/// board without a line is a draw, anything else is still in progress.
#[instrument]
pub fn compute_outcome(board: &Board) -> Outcome {
    if let Some((mark, line)) = check_winner(board) {
        Outcome::Win { mark, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
