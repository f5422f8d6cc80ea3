//! Property-based tests for win/draw detection and the timeline.

use proptest::prelude::*;
use strum::IntoEnumIterator;
use sanmoku_core::{
    Board, GameState, LINES, LabelStyle, Mark, MoveOrder, Outcome, Position, Square,
    compute_outcome, move_list,
};

// =============================================================================
// Strategies
// =============================================================================

/// Any square, including combinations legal play never reaches.
fn arb_square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Mark::X)),
        Just(Square::Occupied(Mark::O)),
    ]
}

fn arb_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(arb_square()).prop_map(Board::from_squares)
}

fn arb_mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::X), Just(Mark::O)]
}

/// A sequence of cell selections; illegal ones are ignored by `play_move`.
fn arb_cells() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..9, 0..16)
}

fn first_complete_line(board: &Board) -> Option<usize> {
    LINES.iter().position(|line| {
        let [a, b, c] = line.positions();
        board.get(a) != Square::Empty
            && board.get(a) == board.get(b)
            && board.get(a) == board.get(c)
    })
}

proptest! {
    #[test]
    fn prop_marked_line_wins_with_first_line_in_scan_order(board in arb_board()) {
        match first_complete_line(&board) {
            Some(index) => {
                let line = LINES[index];
                let mark = board.get(line.positions()[0]).mark();
                prop_assert_eq!(
                    compute_outcome(&board),
                    Outcome::Win { mark: mark.unwrap(), line }
                );
            }
            None if board.occupied() == 9 => {
                prop_assert_eq!(compute_outcome(&board), Outcome::Draw);
            }
            None => {
                prop_assert_eq!(compute_outcome(&board), Outcome::InProgress);
            }
        }
    }

    #[test]
    fn prop_forced_line_always_wins(board in arb_board(), index in 0usize..8, mark in arb_mark()) {
        let line = LINES[index];
        let mut squares = *board.squares();
        for pos in line.positions() {
            squares[pos.to_index()] = Square::Occupied(mark);
        }
        let board = Board::from_squares(squares);

        let won = matches!(compute_outcome(&board), Outcome::Win { .. });
        prop_assert!(won);
    }

    #[test]
    fn prop_apply_move_changes_only_target(
        board in arb_board(),
        cell in 0usize..9,
        mark in arb_mark(),
    ) {
        let pos = Position::from_index(cell).unwrap();
        let before = board;

        if let Ok(after) = board.apply_move(pos, mark) {
            prop_assert_eq!(board, before);
            for other in Position::iter() {
                if other == pos {
                    prop_assert_eq!(after.get(other), Square::Occupied(mark));
                } else {
                    prop_assert_eq!(after.get(other), board.get(other));
                }
            }
        } else {
            let illegal = !board.is_empty(pos) || compute_outcome(&board) != Outcome::InProgress;
            prop_assert!(illegal);
        }
    }

    #[test]
    fn prop_timeline_length_tracks_view(cells in arb_cells()) {
        let state = cells.iter().fold(GameState::new(), |s, c| s.play_move(*c));

        prop_assert_eq!(state.history().len(), state.plies() + 1);
        prop_assert!(state.is_at_latest());
        prop_assert_eq!(state.current_board().occupied(), state.plies());
    }

    #[test]
    fn prop_jump_then_play_truncates(
        cells in arb_cells(),
        target in 0usize..10,
        cell in 0usize..9,
    ) {
        let state = cells.iter().fold(GameState::new(), |s, c| s.play_move(*c));
        let target = target % state.history().len();
        let viewed = state.jump_to(target).unwrap();
        let next = viewed.play_move(cell);

        if next == viewed {
            prop_assert_eq!(next.history().len(), state.history().len());
        } else {
            prop_assert_eq!(next.history().len(), target + 2);
            prop_assert_eq!(&next.history()[..=target], &state.history()[..=target]);
        }
    }

    #[test]
    fn prop_reversal_is_involution(cells in arb_cells()) {
        let state = cells.iter().fold(GameState::new(), |s, c| s.play_move(*c));
        let ascending = move_list(&state, MoveOrder::Ascending, LabelStyle::WithCoordinates);
        let mut twice = move_list(&state, MoveOrder::Descending, LabelStyle::WithCoordinates);
        twice.reverse();

        prop_assert_eq!(twice, ascending);
    }
}
