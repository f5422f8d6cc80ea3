//! The game timeline: board snapshots, the viewed ply, and time-travel.
//!
//! A [`GameState`] is an immutable value. Every transition returns a new
//! state, so front ends can keep old states around without aliasing.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, warn};

use super::action::{GameError, Move, MoveError};
use super::contracts::{Contract, PlayContract};
use super::invariants::{InvariantSet, InvariantViolation, TimelineInvariants};
use super::position::{Coordinate, Position};
use super::rules::{Line, Outcome, compute_outcome};
use super::types::{Board, Mark};

/// One entry in the history: the board after a ply and the move that made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Move>,
}

impl Snapshot {
    /// The empty board that opens every game.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Builds a snapshot without relating it to any predecessor.
    #[cfg(test)]
    pub(crate) fn unchecked(board: Board, last_move: Option<Move>) -> Self {
        Self { board, last_move }
    }

    /// Returns the board at this ply.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move that produced this snapshot (`None` for ply 0).
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Returns the 1-based coordinate of the move that produced this snapshot.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.last_move.map(|m| m.coordinate())
    }
}

/// Status of the viewed ply, suitable for a one-line status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Game continues; `mark` plays the 1-based move `move_number`.
    NextPlayer {
        /// Mark to move.
        mark: Mark,
        /// 1-based number of the move about to be played.
        move_number: usize,
    },
    /// A mark completed a line.
    Winner(Mark),
    /// Board full without a line.
    Draw,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::NextPlayer { mark, move_number } => {
                write!(f, "Next player: {} (move #{})", mark, move_number)
            }
            Status::Winner(mark) => write!(f, "Winner: {}", mark),
            Status::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete game state: the active timeline and the ply being viewed.
///
/// Invariants (see [`crate::invariants`]):
/// - `history` is never empty and starts with the empty board
/// - `view_index < history.len()`
/// - each snapshot adds exactly one mark to its predecessor, alternating X and O
///
/// Deserialization checks all of them and rejects a timeline that breaks any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    history: Vec<Snapshot>,
    view_index: usize,
}

/// Unvalidated wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<Snapshot>,
    view_index: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvariantViolation;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = GameState {
            history: raw.history,
            view_index: raw.view_index,
        };
        TimelineInvariants::check_all(&state).map_err(|violations| {
            let description = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%description, "Rejected invalid timeline");
            InvariantViolation::new(description)
        })?;
        Ok(state)
    }
}

impl GameState {
    /// Creates a new game: a single empty board, viewed at ply 0.
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::initial()],
            view_index: 0,
        }
    }

    /// Builds a state without checking any invariant.
    #[cfg(test)]
    pub(crate) fn unchecked(history: Vec<Snapshot>, view_index: usize) -> Self {
        Self {
            history,
            view_index,
        }
    }

    /// Returns the history of snapshots on the active timeline.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Returns the ply currently viewed.
    pub fn view_index(&self) -> usize {
        self.view_index
    }

    /// Number of plies on the active timeline.
    pub fn plies(&self) -> usize {
        self.history.len() - 1
    }

    /// Returns true when the latest ply is being viewed.
    pub fn is_at_latest(&self) -> bool {
        self.view_index == self.plies()
    }

    /// Returns the viewed snapshot.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.view_index]
    }

    /// Returns the viewed board.
    pub fn current_board(&self) -> &Board {
        &self.current().board
    }

    /// Returns the coordinate of the move that produced `ply`.
    pub fn coordinate_at(&self, ply: usize) -> Option<Coordinate> {
        self.history.get(ply).and_then(Snapshot::coordinate)
    }

    /// Mark to move from the viewed ply.
    pub fn to_move(&self) -> Mark {
        Mark::to_move_at(self.view_index)
    }

    /// Outcome of the viewed board.
    pub fn outcome(&self) -> Outcome {
        compute_outcome(self.current_board())
    }

    /// Winning line on the viewed board, for highlighting.
    pub fn winning_line(&self) -> Option<Line> {
        self.outcome().line()
    }

    /// Status line for the viewed ply.
    pub fn status(&self) -> Status {
        match self.outcome() {
            Outcome::InProgress => Status::NextPlayer {
                mark: self.to_move(),
                move_number: self.view_index + 1,
            },
            Outcome::Win { mark, .. } => Status::Winner(mark),
            Outcome::Draw => Status::Draw,
        }
    }

    /// Plays `cell` from the viewed ply.
    ///
    /// Any snapshots after the viewed ply are discarded before the new one is
    /// appended, and the view moves to the new latest ply.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the cell index is off the board, the square
    /// is occupied, or the viewed board is already won or drawn.
    #[instrument(skip(self), fields(view_index = self.view_index, plies = self.plies()))]
    pub fn try_play(&self, cell: usize) -> Result<GameState, MoveError> {
        PlayContract::pre(self, &cell)?;
        let pos = Position::from_index(cell).ok_or(MoveError::OffBoard(cell))?;

        let mark = self.to_move();
        let board = self.current_board().apply_move(pos, mark)?;

        let mut history = self.history[..=self.view_index].to_vec();
        history.push(Snapshot {
            board,
            last_move: Some(Move::new(mark, pos)),
        });
        let next = GameState {
            view_index: history.len() - 1,
            history,
        };

        if cfg!(debug_assertions) {
            PlayContract::post(self, &next)?;
        }

        debug!(
            %mark,
            cell,
            discarded = self.plies() - self.view_index,
            plies = next.plies(),
            "Move played"
        );
        Ok(next)
    }

    /// Plays `cell` from the viewed ply, ignoring illegal moves.
    ///
    /// An illegal move returns an unchanged copy of the state, matching a
    /// click that does nothing. A move that fails the timeline postcondition
    /// is refused the same way but logged as an error.
    #[instrument(skip(self), fields(view_index = self.view_index))]
    pub fn play_move(&self, cell: usize) -> GameState {
        match self.try_play(cell) {
            Ok(next) => next,
            Err(
                err @ (MoveError::SquareOccupied(_) | MoveError::GameOver | MoveError::OffBoard(_)),
            ) => {
                debug!(error = %err, cell, "Ignoring illegal move");
                self.clone()
            }
            Err(MoveError::InvariantViolation(reason)) => {
                error!(%reason, cell, "Move would break the timeline, keeping previous state");
                self.clone()
            }
        }
    }

    /// Views the board at `ply` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IndexOutOfRange`] if `ply` is past the latest ply.
    #[instrument(skip(self), fields(plies = self.plies()))]
    pub fn jump_to(&self, ply: usize) -> Result<GameState, GameError> {
        if ply >= self.history.len() {
            return Err(GameError::IndexOutOfRange {
                index: ply,
                len: self.history.len(),
            });
        }
        debug!(from = self.view_index, to = ply, "Jumping through history");
        Ok(GameState {
            history: self.history.clone(),
            view_index: ply,
        })
    }

    /// Replays cells from an empty board, stopping at the first illegal move.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] of the first rejected cell.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<GameState, MoveError> {
        cells
            .iter()
            .try_fold(GameState::new(), |state, cell| state.try_play(*cell))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
