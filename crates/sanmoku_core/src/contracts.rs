//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::history::GameState;
use super::invariants::{InvariantSet, TimelineInvariants};
use super::position::Position;
use super::rules::compute_outcome;
use super::types::Board;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the square at `pos`.
    #[instrument(skip(board))]
    pub fn check(board: &Board, pos: Position) -> Result<(), MoveError> {
        if board.is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Precondition: The board has neither a winner nor a full grid.
pub struct GameInProgress;

impl GameInProgress {
    /// Checks the outcome of `board`.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), MoveError> {
        if compute_outcome(board).is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a move is legal if the square is empty and the
/// game has not ended.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(board: &Board, pos: Position) -> Result<(), MoveError> {
        SquareIsEmpty::check(board, pos)?;
        GameInProgress::check(board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for playing a cell from the viewed ply of a timeline.
///
/// Preconditions:
/// - Cell index names a square
/// - Square is empty on the viewed board
/// - Viewed board is still in progress
///
/// Postconditions:
/// - All [`TimelineInvariants`] hold on the new timeline
pub struct PlayContract;

impl Contract<GameState, usize> for PlayContract {
    fn pre(state: &GameState, cell: &usize) -> Result<(), MoveError> {
        let pos = Position::from_index(*cell).ok_or(MoveError::OffBoard(*cell))?;
        LegalMove::check(state.current_board(), pos)
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), MoveError> {
        TimelineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Timeline invariant violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
