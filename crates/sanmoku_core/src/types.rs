//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::contracts::LegalMove;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the mark that moves from the given ply.
    ///
    /// X moves from even plies, O from odd ones.
    pub fn to_move_at(ply: usize) -> Self {
        if ply % 2 == 0 { Mark::X } else { Mark::O }
    }

    /// Glyph used when rendering the mark.
    pub fn glyph(self) -> char {
        match self {
            Mark::X => '×',
            Mark::O => '○',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: placing a mark through [`Board::apply_move`] yields a
/// new board and leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from raw squares.
    ///
    /// Any combination is accepted, including ones legal play never reaches.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Places `mark` at `pos`, returning the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the square is taken and
    /// [`MoveError::GameOver`] if this board is already won or drawn.
    #[instrument(skip(self), fields(occupied = self.occupied()))]
    pub fn apply_move(&self, pos: Position, mark: Mark) -> Result<Board, MoveError> {
        LegalMove::check(self, pos)?;
        let mut next = *self;
        next.squares[pos.to_index()] = Square::Occupied(mark);
        Ok(next)
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their 1-based key so the grid doubles as a keypad.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.glyph().to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_displays_glyph() {
        assert_eq!(Mark::X.to_string(), "×");
        assert_eq!(Mark::O.to_string(), Mark::O.glyph().to_string());
    }

    #[test]
    fn test_to_move_follows_parity() {
        assert_eq!(Mark::to_move_at(0), Mark::X);
        assert_eq!(Mark::to_move_at(1), Mark::O);
        assert_eq!(Mark::to_move_at(8), Mark::X);
    }

    #[test]
    fn test_apply_move_leaves_input_untouched() {
        let board = Board::new();
        let next = board.apply_move(Position::Center, Mark::X).unwrap();

        assert_eq!(board, Board::new());
        assert_eq!(next.get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(next.occupied(), 1);
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let board = Board::new().apply_move(Position::TopLeft, Mark::X).unwrap();
        assert_eq!(
            board.apply_move(Position::TopLeft, Mark::O),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_display_grid() {
        let board = Board::new().apply_move(Position::Center, Mark::O).unwrap();
        assert_eq!(board.display(), "1|2|3\n-+-+-\n4|○|6\n-+-+-\n7|8|9");
    }
}
