//! Win detection logic for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::super::{Board, Mark, Position, Square};

/// Three positions that win when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// Returns the positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns the board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Checks whether the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "({a},{b},{c})")
    }
}

/// The 8 winning lines in scan order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Checks if there is a winner on the board.
///
/// Returns the mark and the first line in [`LINES`] order that it fills,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Mark, Line)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Square::Occupied(mark)
                if board.get(b) == board.get(a) && board.get(c) == board.get(a) =>
            {
                Some((mark, *line))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark_line(line: Line, mark: Mark) -> Board {
        let mut squares = [Square::Empty; 9];
        for pos in line.positions() {
            squares[pos.to_index()] = Square::Occupied(mark);
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                assert_eq!(check_winner(&mark_line(line, mark)), Some((mark, line)));
            }
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = Board::from_squares([
            Square::Occupied(Mark::X),
            Square::Occupied(Mark::O),
            Square::Occupied(Mark::X),
            Square::Empty,
            Square::Empty,
            Square::Empty,
            Square::Empty,
            Square::Empty,
            Square::Empty,
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_line_display() {
        assert_eq!(LINES[7].to_string(), "(2,4,6)");
    }
}
