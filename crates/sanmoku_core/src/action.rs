//! Moves and the errors raised while applying or navigating them.
//!
//! Moves are domain events, not side effects: a [`Move`] records who marked
//! which square, and the history keeps one per ply.

use super::position::{Coordinate, Position};
use super::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where the mark was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }

    /// Returns the mark placed by this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the 1-based coordinate of this move.
    pub fn coordinate(&self) -> Coordinate {
        self.position.coordinate()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// A move that cannot be played.
///
/// Front ends are expected to ignore these: selecting a taken square or
/// clicking after the game ended simply does nothing.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board already has a winner or is full.
    #[display("Game is already over")]
    GameOver,

    /// The cell index does not name a square.
    #[display("Cell index {} is off the board", _0)]
    OffBoard(usize),

    /// A transition broke a timeline invariant (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Errors surfaced by the timeline and the session reducer.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A move was rejected.
    #[display("Illegal move: {}", _0)]
    IllegalMove(MoveError),

    /// A history jump named a ply that does not exist.
    #[display("Ply {} is outside the history (length {})", index, len)]
    IndexOutOfRange {
        /// Requested ply.
        index: usize,
        /// Length of the history at the time of the request.
        len: usize,
    },
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IllegalMove(err) => Some(err),
            GameError::IndexOutOfRange { .. } => None,
        }
    }
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        GameError::IllegalMove(err)
    }
}
